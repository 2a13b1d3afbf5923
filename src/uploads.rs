//! On-disk storage for uploaded product images.
//!
//! Files are written as `{millis}_{sanitized_base}{ext}` into the upload
//! directory and served back under [`PUBLIC_PREFIX`]. Two files uploaded in
//! the same millisecond with the same original name map to the same stored
//! name; the later one overwrites the earlier.

use std::io;
use std::path::{Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;
use chrono::Utc;

use crate::domain::types::{ImagePath, TypeConstraintError};

/// URL prefix (and stored path prefix) under which uploads are served.
pub const PUBLIC_PREFIX: &str = "uploads";

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_base_name(base: &str) -> String {
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds the stored file name for an upload received at `millis`.
///
/// Directory components of the client-supplied name are discarded; the
/// extension is kept verbatim.
pub fn stored_file_name(original: Option<&str>, millis: i64) -> String {
    let file_name = original
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .unwrap_or_default();
    let path = Path::new(file_name);
    let base = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{millis}_{}{extension}", sanitize_base_name(base))
}

/// A file written by [`UploadStore::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    /// Path relative to the server root, e.g. `uploads/1700000000000_knob.png`.
    pub relative_path: ImagePath,
    pub absolute_path: PathBuf,
}

/// Upload directory handle shared by request handlers.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_root(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }

    /// Copies a received temporary file into the upload directory.
    pub fn save(&self, file: &TempFile) -> io::Result<StoredFile> {
        let name = stored_file_name(file.file_name.as_deref(), Utc::now().timestamp_millis());
        let absolute_path = self.root.join(&name);
        std::fs::copy(file.file.path(), &absolute_path)?;

        let relative_path = ImagePath::new(format!("{PUBLIC_PREFIX}/{name}"))
            .map_err(|e: TypeConstraintError| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Ok(StoredFile {
            relative_path,
            absolute_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_everything_outside_the_allowed_set() {
        assert_eq!(sanitize_base_name("Knob v2 (final)"), "Knob_v2__final_");
        assert_eq!(sanitize_base_name("plate-hitch_01"), "plate-hitch_01");
        assert_eq!(sanitize_base_name("ščit"), "__it");
    }

    #[test]
    fn builds_timestamp_prefixed_names() {
        assert_eq!(
            stored_file_name(Some("Spacer, 4-1.PNG"), 1_700_000_000_123),
            "1700000000123_Spacer__4-1.PNG"
        );
        assert_eq!(
            stored_file_name(Some("archive.tar.gz"), 5),
            "5_archive_tar.gz"
        );
    }

    #[test]
    fn drops_client_directories_and_handles_missing_names() {
        assert_eq!(
            stored_file_name(Some("C:\\photos\\knob.jpg"), 1),
            "1_knob.jpg"
        );
        assert_eq!(stored_file_name(Some("../../etc/passwd"), 2), "2_passwd");
        assert_eq!(stored_file_name(None, 3), "3_");
    }

    #[test]
    fn same_name_in_same_millisecond_collides() {
        assert_eq!(
            stored_file_name(Some("a.png"), 42),
            stored_file_name(Some("a.png"), 42)
        );
    }

    #[test]
    fn saves_into_upload_directory() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"));
        store.ensure_root().unwrap();

        let mut temp = tempfile::NamedTempFile::new().unwrap();
        temp.write_all(b"png-bytes").unwrap();
        let upload = TempFile {
            file: temp,
            content_type: None,
            file_name: Some("knob.png".to_string()),
            size: 9,
        };

        let stored = store.save(&upload).unwrap();
        assert!(stored.relative_path.as_str().starts_with("uploads/"));
        assert!(stored.relative_path.as_str().ends_with("_knob.png"));
        assert_eq!(std::fs::read(&stored.absolute_path).unwrap(), b"png-bytes");
    }
}
