//! Article photo loading

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

use crate::{NewsdeskError, Result};

/// Extensions accepted for article photos.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A photo attached to an article
#[derive(Debug, Clone)]
pub struct ArticleImage {
    pub path: PathBuf,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ArticleImage {
    /// Load a photo from disk. Only the file type is checked.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime = mime_for(path).ok_or_else(|| {
            NewsdeskError::UnsupportedImage(format!(
                "{} (supported: {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))
        })?;

        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Loaded article image");

        Ok(Self {
            path: path.to_path_buf(),
            mime,
            bytes,
        })
    }

    /// File name shown in text layouts.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Inline `data:` URI for embedding in HTML.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_jpeg_and_png_case_insensitively() {
        assert_eq!(mime_for(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for(Path::new("a.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for(Path::new("photos/b.Png")), Some("image/png"));
    }

    #[test]
    fn rejects_other_types_before_reading() {
        let err = ArticleImage::load("/definitely/not/here.gif").unwrap_err();
        assert!(matches!(err, NewsdeskError::UnsupportedImage(_)));

        let err = ArticleImage::load("/definitely/not/here").unwrap_err();
        assert!(matches!(err, NewsdeskError::UnsupportedImage(_)));
    }

    #[test]
    fn loads_and_encodes_png() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write image");

        let image = ArticleImage::load(&path).expect("png loads");
        assert_eq!(image.mime, "image/png");
        assert_eq!(image.file_name(), "photo.png");
        assert_eq!(image.data_uri(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ArticleImage::load("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, NewsdeskError::Io(_)));
    }
}
