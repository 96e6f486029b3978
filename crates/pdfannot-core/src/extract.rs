//! Annotation extraction.
//!
//! Walks a [`DocumentSource`] page by page, resolves each page's `/Annots`
//! array, and collects the `/Contents` text of every annotation dictionary
//! into [`AnnotationNotes`]. [`render_note`] turns the collected notes into
//! the Markdown note body.
//!
//! Extraction is best-effort: an entry that does not resolve to a dictionary,
//! or has no usable `/Contents`, is skipped and extraction continues.
//! Entries within a page keep the order of the `/Annots` array. That order
//! has no defined meaning in PDF; it is simply the deterministic choice.

use crate::object::{Dictionary, PdfObject};
use crate::options::ExtractOptions;
use crate::source::DocumentSource;
use crate::text::object_text;
use crate::unicode_norm::UnicodeNorm;

/// One annotation's text, tagged with the page it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteEntry {
    /// 1-based page number.
    pub page_number: usize,
    /// Decoded `/Contents` text.
    pub text: String,
}

/// Annotation text collected from a document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationNotes {
    /// Entries in ascending page order, then `/Annots` array order.
    pub entries: Vec<NoteEntry>,
    /// Number of `/Annots` entries that were not dictionaries or could not be resolved.
    pub skipped: usize,
}

impl AnnotationNotes {
    /// Whether any annotation carried non-empty text.
    pub fn found(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Distinct 1-based page numbers that carry annotation text, ascending.
    pub fn pages(&self) -> Vec<usize> {
        let mut pages: Vec<usize> = self.entries.iter().map(|e| e.page_number).collect();
        pages.dedup();
        pages
    }
}

/// The rendered note and whether it has any content worth persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Note body: header line followed by one section per annotation.
    pub text: String,
    /// `false` when no annotation on any page carried non-empty text.
    pub found: bool,
}

/// Extract annotation text and render it as a note.
///
/// `source_link` is written into the header line as a `[[...]]` link.
pub fn extract<D: DocumentSource>(
    doc: &D,
    source_link: &str,
    options: &ExtractOptions,
) -> Extraction {
    let notes = collect_notes(doc, options);
    Extraction {
        text: render_note(source_link, &notes),
        found: notes.found(),
    }
}

/// Collect the `/Contents` text of every annotation, page by page.
pub fn collect_notes<D: DocumentSource>(doc: &D, options: &ExtractOptions) -> AnnotationNotes {
    let mut notes = AnnotationNotes::default();

    for index in options.page_indices(doc.page_count()) {
        let Some(page) = doc.page(index) else {
            tracing::debug!(page = index + 1, "page could not be loaded, skipping");
            continue;
        };
        let Some(annots) = doc.annotations_ref(&page) else {
            continue;
        };
        let entries = match doc.deref(annots) {
            Some(PdfObject::Array(entries)) => entries,
            Some(other) => {
                tracing::debug!(
                    page = index + 1,
                    kind = other.type_name(),
                    "/Annots is not an array, skipping page"
                );
                continue;
            }
            None => {
                tracing::debug!(page = index + 1, "/Annots does not resolve, skipping page");
                continue;
            }
        };

        for (position, entry) in entries.into_iter().enumerate() {
            let dict = match doc.deref(entry) {
                Some(PdfObject::Dictionary(dict)) => dict,
                resolved => {
                    tracing::debug!(
                        page = index + 1,
                        position,
                        kind = resolved.as_ref().map_or("unresolved", PdfObject::type_name),
                        "annotation entry is not a dictionary, skipping"
                    );
                    notes.skipped += 1;
                    continue;
                }
            };
            if let Some(text) = contents_text(doc, &dict, options.unicode_norm) {
                notes.entries.push(NoteEntry {
                    page_number: index + 1,
                    text,
                });
            }
        }
    }

    tracing::debug!(
        entries = notes.entries.len(),
        skipped = notes.skipped,
        "annotation extraction finished"
    );
    notes
}

/// The annotation's `/Contents` as display text, or `None` when absent,
/// not text, or empty.
fn contents_text<D: DocumentSource>(
    doc: &D,
    dict: &Dictionary,
    norm: UnicodeNorm,
) -> Option<String> {
    let value = doc.deref(dict.get("Contents")?.clone())?;
    let text = object_text(&value)?;
    if text.is_empty() {
        return None;
    }
    Some(norm.normalize(&text))
}

/// Render collected notes as the note body.
///
/// ```text
/// PDF File: [[<source_link>]]
///
/// ## Page <N>
/// <contents>
///
/// ```
pub fn render_note(source_link: &str, notes: &AnnotationNotes) -> String {
    let mut out = format!("PDF File: [[{source_link}]]\n\n");
    for entry in &notes.entries {
        out.push_str(&format!("## Page {}\n{}\n\n", entry.page_number, entry.text));
    }
    out
}
