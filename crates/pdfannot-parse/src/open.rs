//! Convenience entry points for opening PDFs with the default backend.

use std::path::Path;

use pdfannot_core::{ExtractOptions, PdfError};

use crate::backend::PdfBackend;
use crate::lopdf_backend::{LopdfBackend, LopdfDocument};

/// Open a PDF document from bytes.
///
/// Enforces [`ExtractOptions::max_input_bytes`] before parsing. When
/// `password` is `Some`, encrypted documents are decrypted with it.
///
/// # Errors
///
/// Returns [`PdfError::ResourceLimitExceeded`] for oversized input,
/// [`PdfError::PasswordRequired`] for an encrypted PDF opened without a
/// password, [`PdfError::InvalidPassword`] for a wrong password, and
/// [`PdfError::ParseError`] when the bytes are not a valid PDF.
pub fn open_document(
    bytes: &[u8],
    password: Option<&str>,
    options: &ExtractOptions,
) -> Result<LopdfDocument, PdfError> {
    options.check_input_size(bytes.len())?;
    let doc = match password {
        Some(password) => LopdfBackend::open_with_password(bytes, password),
        None => LopdfBackend::open(bytes),
    };
    doc.map_err(PdfError::from)
}

/// Open a PDF document from a file path.
///
/// Reads the file into memory and delegates to [`open_document`].
///
/// # Errors
///
/// Returns [`PdfError::IoError`] if the file cannot be read, otherwise the
/// errors of [`open_document`].
pub fn open_file(
    path: impl AsRef<Path>,
    password: Option<&str>,
    options: &ExtractOptions,
) -> Result<LopdfDocument, PdfError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| PdfError::IoError(e.to_string()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read PDF file");
    open_document(&bytes, password, options)
}
