//! Profile extraction from a résumé document.
//!
//! Loads a PDF and strips it down to a cleaned text blob. Extraction
//! failures degrade to an empty profile: the failure is logged and the
//! assistant simply ends up knowing nothing about its subject.

use std::path::Path;
use thiserror::Error;

/// Errors from reading or parsing the source document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse document: {0}")]
    Parse(String),
}

/// Cleaned text derived once from the input document.
///
/// Immutable after construction; there is no update path.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    text: String,
}

impl Profile {
    /// Load a profile from a PDF document.
    ///
    /// Any read or parse failure yields an empty profile. The failure is
    /// logged, never surfaced to the caller, and never retried.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_document(path) {
            Ok(raw) => Self::from_text(&raw),
            Err(e) => {
                tracing::warn!(path = %path.display(), "document extraction failed: {e}");
                Self::default()
            }
        }
    }

    /// Build a profile from raw text, applying the same cleaning as
    /// [`Profile::load`].
    pub fn from_text(raw: &str) -> Self {
        Self {
            text: clean_extracted_text(raw),
        }
    }

    /// The cleaned profile text. Empty if extraction failed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Read the document and extract its page-ordered raw text.
fn read_document(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractionError::Parse(e.to_string()))
}

/// Collapse whitespace runs to single spaces and convert sentence
/// boundaries to newlines.
fn clean_extracted_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(". ", ".\n")
}
