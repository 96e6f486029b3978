//! Document access trait and an in-memory implementation.
//!
//! Defines the [`DocumentSource`] trait the extractor reads from. A parsing
//! backend (see `pdfannot-parse`) implements it over a real PDF; the
//! [`MemoryDocument`] implementation builds the same object graph by hand.
//!
//! # Usage
//!
//! ```ignore
//! let count = doc.page_count();
//! let page = doc.page(0).unwrap();
//! if let Some(annots) = doc.annotations_ref(&page) {
//!     let array = doc.deref(annots);
//! }
//! ```

use std::collections::BTreeMap;

use crate::object::{Dictionary, ObjectRef, PdfObject};

/// Maximum number of reference hops followed by [`DocumentSource::deref`].
pub const MAX_REFERENCE_HOPS: usize = 16;

/// Read-only view over a parsed PDF document.
pub trait DocumentSource {
    /// A handle to a single page.
    type Page;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Access a page by 0-based index. Returns `None` when out of range or
    /// when the page object cannot be loaded.
    fn page(&self, index: usize) -> Option<Self::Page>;

    /// The page's `/Annots` entry as stored (an array or a reference to one),
    /// or `None` when the page has no `/Annots` key.
    fn annotations_ref(&self, page: &Self::Page) -> Option<PdfObject>;

    /// Look up an indirect object in the document's object table.
    fn resolve(&self, reference: ObjectRef) -> Option<PdfObject>;

    /// Follow references until a direct object is reached.
    ///
    /// Direct objects are returned unchanged. Returns `None` when a reference
    /// is dangling or the chain exceeds [`MAX_REFERENCE_HOPS`].
    fn deref(&self, object: PdfObject) -> Option<PdfObject> {
        let mut current = object;
        for _ in 0..MAX_REFERENCE_HOPS {
            match current.as_reference() {
                Some(r) => current = self.resolve(r)?,
                None => return Some(current),
            }
        }
        tracing::debug!("reference chain exceeded {MAX_REFERENCE_HOPS} hops");
        None
    }
}

impl<D: DocumentSource + ?Sized> DocumentSource for &D {
    type Page = D::Page;

    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn page(&self, index: usize) -> Option<Self::Page> {
        (**self).page(index)
    }

    fn annotations_ref(&self, page: &Self::Page) -> Option<PdfObject> {
        (**self).annotations_ref(page)
    }

    fn resolve(&self, reference: ObjectRef) -> Option<PdfObject> {
        (**self).resolve(reference)
    }
}

/// A document assembled in memory from an object table and page dictionaries.
///
/// # Example
///
/// ```
/// use pdfannot_core::{Dictionary, DocumentSource, MemoryDocument, PdfObject};
///
/// let mut doc = MemoryDocument::new();
/// let annot = doc.add_object(Dictionary::new().with("Contents", PdfObject::string("hello")));
/// doc.add_page(Dictionary::new().with("Annots", vec![PdfObject::from(annot)]));
/// assert_eq!(doc.page_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    objects: BTreeMap<ObjectRef, PdfObject>,
    pages: Vec<Dictionary>,
    next_number: u32,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            pages: Vec::new(),
            next_number: 1,
        }
    }

    /// Store an object under a fresh reference and return that reference.
    pub fn add_object(&mut self, object: impl Into<PdfObject>) -> ObjectRef {
        let reference = ObjectRef::new(self.next_number.max(1), 0);
        self.next_number = reference.number + 1;
        self.objects.insert(reference, object.into());
        reference
    }

    /// Store an object under a caller-chosen reference, replacing any previous one.
    pub fn insert_object(&mut self, reference: ObjectRef, object: impl Into<PdfObject>) {
        self.next_number = self.next_number.max(reference.number + 1);
        self.objects.insert(reference, object.into());
    }

    /// Append a page dictionary. Returns its 0-based index.
    pub fn add_page(&mut self, page: Dictionary) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }
}

impl DocumentSource for MemoryDocument {
    type Page = usize;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Option<usize> {
        (index < self.pages.len()).then_some(index)
    }

    fn annotations_ref(&self, page: &usize) -> Option<PdfObject> {
        self.pages.get(*page)?.get("Annots").cloned()
    }

    fn resolve(&self, reference: ObjectRef) -> Option<PdfObject> {
        self.objects.get(&reference).cloned()
    }
}
