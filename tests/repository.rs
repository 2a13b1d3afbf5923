use chrono::Utc;
use diesel::prelude::*;
use product_catalog::domain::catalog::group_rows;
use product_catalog::domain::product::{NewProduct, NewProductImage};
use product_catalog::domain::types::{DrawingNumber, ImagePath, ProductId, ProductName};
use product_catalog::repository::{DieselRepository, ProductReader, ProductWriter};
use product_catalog::schema::products;

mod common;

fn new_product(name: &str, prog: &str) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid name"),
        drawing_number: DrawingNumber::new(prog).expect("valid drawing number"),
        created_at: Utc::now().naive_utc(),
    }
}

fn new_image(product_id: ProductId, path: &str) -> NewProductImage {
    NewProductImage {
        product_id,
        path: ImagePath::new(path).expect("valid path"),
        uploaded_at: Utc::now().naive_utc(),
    }
}

#[test]
fn creates_products_with_increasing_ids() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_product(&new_product("Knob", "1234"))
        .expect("should create product");
    let second = repo
        .create_product(&new_product("Shroud", "n1259"))
        .expect("should create product");

    assert!(second > first);

    let mut conn = test_db.pool().get().expect("should acquire connection");
    let stored: (String, String) = products::table
        .filter(products::id.eq(first.get()))
        .select((products::name, products::drawing_number))
        .first(&mut conn)
        .expect("product row should exist");
    assert_eq!(stored, ("Knob".to_string(), "1234".to_string()));
}

#[test]
fn lists_left_join_in_product_then_image_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let knob = repo.create_product(&new_product("Knob", "1234")).unwrap();
    let anchor = repo.create_product(&new_product("Anchor", "n1281")).unwrap();
    let hanger = repo.create_product(&new_product("Hanger", "n1232")).unwrap();

    let hanger_image = repo
        .create_product_image(&new_image(hanger, "uploads/3_hanger.png"))
        .unwrap();
    let knob_front = repo
        .create_product_image(&new_image(knob, "uploads/1_front.png"))
        .unwrap();
    let knob_back = repo
        .create_product_image(&new_image(knob, "uploads\\2_back.png"))
        .unwrap();

    let rows = repo.list_catalog_rows().expect("should list rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].product_id, knob);
    assert_eq!(rows[0].image_id, Some(knob_front));
    assert_eq!(rows[1].image_id, Some(knob_back));
    assert_eq!(rows[2].product_id, anchor);
    assert_eq!(rows[2].image_id, None);
    assert_eq!(rows[2].image_path, None);
    assert_eq!(rows[3].image_id, Some(hanger_image));

    let catalog = group_rows(rows);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[0].cover_image().unwrap().url, "/uploads/1_front.png");
    assert_eq!(catalog[0].images[1].url, "/uploads/2_back.png");
    assert!(catalog[1].images.is_empty());
}

#[test]
fn rejects_images_for_unknown_products() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = ProductId::new(999).unwrap();
    let result = repo.create_product_image(&new_image(missing, "uploads/x.png"));

    assert!(result.is_err());
}

#[test]
fn lists_existing_rows_with_blank_text() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut conn = test_db.pool().get().expect("should acquire connection");
    diesel::insert_into(products::table)
        .values((
            products::name.eq(""),
            products::drawing_number.eq("  "),
            products::created_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)
        .expect("should insert legacy row");

    let rows = repo.list_catalog_rows().expect("should list rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "");
    assert_eq!(rows[0].drawing_number, "  ");
}

#[test]
fn empty_catalog_has_no_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.list_catalog_rows().unwrap().is_empty());
}
