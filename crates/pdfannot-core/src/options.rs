//! Extraction options.

use crate::error::PdfError;
use crate::unicode_norm::UnicodeNorm;

/// Options controlling annotation extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Unicode normalization applied to each annotation's text (default: none).
    pub unicode_norm: UnicodeNorm,
    /// 0-based page indices to visit (default: `None` = every page).
    ///
    /// Indices are visited in ascending order whatever order they are given
    /// in; duplicates and out-of-range indices are ignored.
    pub pages: Option<Vec<usize>>,
    /// Maximum input PDF size in bytes (default: `None` = no limit).
    pub max_input_bytes: Option<usize>,
}

impl ExtractOptions {
    /// Restrict extraction to the given 0-based page indices.
    pub fn with_pages(mut self, pages: impl IntoIterator<Item = usize>) -> Self {
        self.pages = Some(pages.into_iter().collect());
        self
    }

    /// Set the Unicode normalization form.
    pub fn with_unicode_norm(mut self, norm: UnicodeNorm) -> Self {
        self.unicode_norm = norm;
        self
    }

    /// The page indices to visit for a document of `page_count` pages,
    /// ascending and deduplicated.
    pub fn page_indices(&self, page_count: usize) -> Vec<usize> {
        match &self.pages {
            None => (0..page_count).collect(),
            Some(pages) => {
                let mut indices: Vec<usize> =
                    pages.iter().copied().filter(|&i| i < page_count).collect();
                indices.sort_unstable();
                indices.dedup();
                indices
            }
        }
    }

    /// Check an input size against [`max_input_bytes`](ExtractOptions::max_input_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::ResourceLimitExceeded`] when `len` is over the limit.
    pub fn check_input_size(&self, len: usize) -> Result<(), PdfError> {
        match self.max_input_bytes {
            Some(max_bytes) if len > max_bytes => Err(PdfError::ResourceLimitExceeded {
                limit_name: "max_input_bytes".to_string(),
                limit_value: max_bytes,
                actual_value: len,
            }),
            _ => Ok(()),
        }
    }
}
