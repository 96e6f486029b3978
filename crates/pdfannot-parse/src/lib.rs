//! pdfannot-parse: PDF parsing backend for pdfannot.
//!
//! Turns PDF bytes into a [`DocumentSource`](pdfannot_core::DocumentSource)
//! using lopdf. It depends on pdfannot-core for the object model and the
//! extractor.

pub mod backend;
pub mod error;
pub mod lopdf_backend;
pub mod open;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument, LopdfPage};
pub use open::{open_document, open_file};
pub use pdfannot_core;
