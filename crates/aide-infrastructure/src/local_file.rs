//! Upload candidates read from the local filesystem.

use aide_core::Result;
use aide_core::upload::UploadSource;
use std::fs;
use std::path::{Path, PathBuf};

/// A file on disk offered for upload.
///
/// Name, size and MIME type are captured when the file is opened; contents
/// are only read on demand. The MIME type is guessed from the extension.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size_bytes: u64,
    mime_type: String,
}

impl LocalFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            path,
            name,
            size_bytes: metadata.len(),
            mime_type,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UploadSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aide_core::upload::PDF_MIME;
    use tempfile::TempDir;

    #[test]
    fn test_pdf_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Report.PDF");
        fs::write(&path, b"%PDF-1.4 body").unwrap();

        let file = LocalFile::open(&path).unwrap();
        assert_eq!(file.name(), "Report.PDF");
        assert_eq!(file.size_bytes(), 13);
        assert_eq!(file.mime_type(), PDF_MIME);
        assert!(file.read_text().unwrap().starts_with("%PDF"));
    }

    #[test]
    fn test_other_types() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "plain").unwrap();

        assert_eq!(LocalFile::open(&path).unwrap().mime_type(), "text/plain");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalFile::open(temp_dir.path().join("absent.pdf")).unwrap_err();
        assert!(err.is_persistence());
    }
}
