//! pdfannot-core: Backend-independent object model and annotation extractor.
//!
//! This crate provides the PDF object model ([`PdfObject`], [`Dictionary`],
//! [`ObjectRef`]), the [`DocumentSource`] trait that parsing backends
//! implement, and the extraction pass that turns annotation `/Contents`
//! into a Markdown note ([`extract`], [`collect_notes`], [`render_note`]).
//!
//! # Example
//!
//! ```
//! use pdfannot_core::{Dictionary, ExtractOptions, MemoryDocument, PdfObject, extract};
//!
//! let mut doc = MemoryDocument::new();
//! let annot = doc.add_object(Dictionary::new().with("Contents", PdfObject::string("hello")));
//! doc.add_page(Dictionary::new().with("Annots", vec![PdfObject::from(annot)]));
//!
//! let result = extract(&doc, "paper.pdf", &ExtractOptions::default());
//! assert!(result.found);
//! assert_eq!(result.text, "PDF File: [[paper.pdf]]\n\n## Page 1\nhello\n\n");
//! ```

pub mod error;
pub mod extract;
pub mod note;
pub mod object;
pub mod options;
pub mod source;
pub mod text;
pub mod unicode_norm;

pub use error::PdfError;
pub use extract::{AnnotationNotes, Extraction, NoteEntry, collect_notes, extract, render_note};
pub use note::{attachment_link, normalize_path, note_file_name};
pub use object::{Dictionary, ObjectRef, PdfObject};
pub use options::ExtractOptions;
pub use source::{DocumentSource, MAX_REFERENCE_HOPS, MemoryDocument};
pub use text::{decode_text_string, object_text};
pub use unicode_norm::UnicodeNorm;
