//! Document loading and saving
//!
//! A `Document` holds the full text of one content file in memory. Every
//! tool in this crate is a whole-file rewrite: load, transform, save.
//! UTF-8 is the fixed encoding for all reads and writes.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading or saving a document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The file could not be read or written
    Io { path: PathBuf, message: String },
    /// The file's bytes are not valid UTF-8
    Encoding { path: PathBuf, valid_up_to: usize },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            }
            DocumentError::Encoding { path, valid_up_to } => {
                write!(
                    f,
                    "{}: invalid UTF-8 after byte {}",
                    path.display(),
                    valid_up_to
                )
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// The full in-memory text content of a processed file.
///
/// Created by [`Document::load`], rewritten as a whole by the pipeline,
/// and written back out with [`Document::save`]. Nothing is retained
/// between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Wrap text that is already in memory.
    pub fn from_text(text: String) -> Self {
        Document { text }
    }

    /// Read the entire file at `path`.
    ///
    /// Fails with [`DocumentError::Io`] when the file is missing or
    /// unreadable, and with [`DocumentError::Encoding`] when its bytes are
    /// not valid UTF-8.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let text = String::from_utf8(bytes).map_err(|e| DocumentError::Encoding {
            path: path.to_path_buf(),
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;
        Ok(Document { text })
    }

    /// Write the full content to `path`, overwriting any existing file.
    ///
    /// The write is not atomic; a crash mid-write can leave a truncated
    /// file behind. Callers that need durability must arrange it
    /// themselves.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, &self.text).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The document's current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, yielding its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_io_error() {
        let result = Document::load(Path::new("does/not/exist.html"));
        assert!(matches!(result, Err(DocumentError::Io { .. })));
    }

    #[test]
    fn from_text_round_trips() {
        let doc = Document::from_text("hello\n".to_string());
        assert_eq!(doc.text(), "hello\n");
        assert_eq!(doc.into_text(), "hello\n");
    }
}
