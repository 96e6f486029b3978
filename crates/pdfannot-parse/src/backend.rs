//! PDF parsing backend trait.
//!
//! Defines the [`PdfBackend`] trait that turns raw PDF bytes into a
//! [`DocumentSource`] the extractor can walk. This keeps the extractor in
//! `pdfannot-core` independent of any particular PDF library.

use pdfannot_core::{DocumentSource, PdfError};

/// Trait abstracting how a PDF is opened.
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// let notes = pdfannot_core::collect_notes(&doc, &ExtractOptions::default());
/// ```
pub trait PdfBackend {
    /// The parsed document type.
    type Document: DocumentSource;

    /// Backend-specific error type, convertible to [`PdfError`].
    type Error: std::error::Error + Into<PdfError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF document, or if the
    /// document is encrypted with a non-empty user password.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Parse and decrypt PDF bytes with a password.
    ///
    /// The password is ignored for documents that are not encrypted.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF document or the
    /// password is wrong.
    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error>;
}
