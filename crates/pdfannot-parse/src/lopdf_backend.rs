//! lopdf-based PDF parsing backend.
//!
//! Implements [`PdfBackend`] and [`DocumentSource`] using the
//! [lopdf](https://crates.io/crates/lopdf) crate. Objects handed to the
//! extractor are converted to [`PdfObject`] one level at a time: nested
//! direct objects are converted, indirect references are left for the
//! extractor to resolve.

use pdfannot_core::{Dictionary, DocumentSource, ObjectRef, PdfError, PdfObject};

use crate::backend::PdfBackend;
use crate::error::BackendError;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Cached ordered list of page ObjectIds (indexed by 0-based page number).
    page_ids: Vec<lopdf::ObjectId>,
}

impl LopdfDocument {
    fn from_inner(inner: lopdf::Document) -> Self {
        // get_pages returns BTreeMap<u32, ObjectId> keyed by 1-based page number
        let page_ids: Vec<lopdf::ObjectId> = inner.get_pages().values().copied().collect();
        tracing::debug!(pages = page_ids.len(), "opened PDF document");
        LopdfDocument { inner, page_ids }
    }

    fn page_dict(&self, page: &LopdfPage) -> Option<&lopdf::Dictionary> {
        self.inner
            .get_object(page.object_id)
            .and_then(|o| o.as_dict())
            .ok()
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_ids.len())
            .finish_non_exhaustive()
    }
}

/// A reference to a single page within a [`LopdfDocument`].
#[derive(Debug, Clone, Copy)]
pub struct LopdfPage {
    /// The lopdf object ID for this page.
    pub object_id: lopdf::ObjectId,
    /// The 0-based page index.
    pub index: usize,
}

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use pdfannot_parse::{LopdfBackend, PdfBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let notes = pdfannot_core::collect_notes(&doc, &ExtractOptions::default());
/// ```
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;

        // The loader decrypts files with an empty user password itself;
        // anything still encrypted needs one.
        if inner.is_encrypted() {
            return Err(BackendError::Core(PdfError::PasswordRequired));
        }

        Ok(LopdfDocument::from_inner(inner))
    }

    fn open_with_password(bytes: &[u8], password: &str) -> Result<Self::Document, Self::Error> {
        // Objects of an encrypted file are only loaded when the password
        // authenticates during the load itself.
        let inner = lopdf::Document::load_mem_with_password(bytes, password).map_err(|e| match e {
            lopdf::Error::InvalidPassword => BackendError::Core(PdfError::InvalidPassword),
            e => BackendError::Parse(format!("failed to parse PDF: {e}")),
        })?;

        Ok(LopdfDocument::from_inner(inner))
    }
}

impl DocumentSource for LopdfDocument {
    type Page = LopdfPage;

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page(&self, index: usize) -> Option<LopdfPage> {
        self.page_ids.get(index).map(|&object_id| LopdfPage { object_id, index })
    }

    fn annotations_ref(&self, page: &LopdfPage) -> Option<PdfObject> {
        let Some(dict) = self.page_dict(page) else {
            tracing::debug!(page = page.index + 1, "page object is not a dictionary");
            return None;
        };
        dict.get(b"Annots").ok().map(convert_object)
    }

    fn resolve(&self, reference: ObjectRef) -> Option<PdfObject> {
        match self.inner.get_object((reference.number, reference.generation)) {
            Ok(obj) => Some(convert_object(obj)),
            Err(e) => {
                tracing::debug!(%reference, "failed to resolve object: {e}");
                None
            }
        }
    }
}

/// Convert a lopdf object into the backend-independent model.
pub(crate) fn convert_object(obj: &lopdf::Object) -> PdfObject {
    match obj {
        lopdf::Object::Null => PdfObject::Null,
        lopdf::Object::Boolean(b) => PdfObject::Boolean(*b),
        lopdf::Object::Integer(i) => PdfObject::Integer(*i),
        lopdf::Object::Real(f) => PdfObject::Real(f64::from(*f)),
        lopdf::Object::Name(name) => PdfObject::Name(String::from_utf8_lossy(name).into_owned()),
        lopdf::Object::String(bytes, _) => PdfObject::String(bytes.clone()),
        lopdf::Object::Array(items) => PdfObject::Array(items.iter().map(convert_object).collect()),
        lopdf::Object::Dictionary(dict) => PdfObject::Dictionary(convert_dict(dict)),
        lopdf::Object::Stream(stream) => PdfObject::Stream(convert_dict(&stream.dict)),
        lopdf::Object::Reference((number, generation)) => {
            PdfObject::Reference(ObjectRef::new(*number, *generation))
        }
    }
}

fn convert_dict(dict: &lopdf::Dictionary) -> Dictionary {
    dict.iter()
        .map(|(key, value)| (String::from_utf8_lossy(key).into_owned(), convert_object(value)))
        .collect()
}

/// Build a minimal document whose pages carry the given /Annots values.
///
/// `None` leaves the page without an /Annots key.
#[cfg(test)]
fn build_test_document(annots: Vec<Option<lopdf::Object>>) -> lopdf::Document {
    use lopdf::{Document, Object, ObjectId, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let page_count = annots.len();
    let mut page_ids: Vec<Object> = Vec::new();
    for page_annots in annots {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if let Some(value) = page_annots {
            page.set("Annots", value);
        }
        page_ids.push(doc.add_object(page).into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Create a minimal valid PDF whose pages carry the given /Annots values.
#[cfg(test)]
fn create_test_pdf(annots: Vec<Option<lopdf::Object>>) -> Vec<u8> {
    let mut doc = build_test_document(annots);
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Create a one-page PDF with a single text annotation, encrypted with
/// 128-bit RC4 under `user_password`.
#[cfg(test)]
fn create_encrypted_test_pdf(user_password: &str, contents: &str) -> Vec<u8> {
    use lopdf::{EncryptionState, EncryptionVersion, Object, Permissions, StringFormat, dictionary};

    let mut doc = build_test_document(vec![None]);
    let annot_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Text",
        "Rect" => vec![100.into(), 700.into(), 120.into(), 720.into()],
        "Contents" => Object::string_literal(contents),
    });
    let page_id = doc.get_pages()[&1];
    if let Ok(page) = doc.get_object_mut(page_id).and_then(Object::as_dict_mut) {
        page.set("Annots", vec![Object::Reference(annot_id)]);
    }

    let file_id = b"pdfannot-test-id".to_vec();
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(file_id.clone(), StringFormat::Literal),
            Object::String(file_id, StringFormat::Literal),
        ]),
    );

    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner-pass",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })
    .expect("failed to build encryption state");
    doc.encrypt(&state).expect("failed to encrypt test PDF");

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save encrypted test PDF");
    buf
}
