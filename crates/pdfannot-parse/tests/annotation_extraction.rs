//! End-to-end extraction tests: PDF bytes → LopdfDocument → note text.
//!
//! Test PDFs are created programmatically using lopdf.

use lopdf::{Document, Object, ObjectId, StringFormat, dictionary};
use pdfannot_core::{ExtractOptions, NoteEntry, collect_notes, extract};
use pdfannot_parse::{LopdfBackend, PdfBackend, open_document};

// --- Test PDF creation helpers ---

/// Builder for small PDFs whose pages carry hand-made /Annots values.
struct PdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<Object>,
}

impl PdfBuilder {
    fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
        }
    }

    fn add(&mut self, obj: impl Into<Object>) -> ObjectId {
        self.doc.add_object(obj.into())
    }

    fn text_annot(&mut self, contents: &str) -> ObjectId {
        self.add(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Text",
            "Rect" => vec![100.into(), 700.into(), 120.into(), 720.into()],
            "Contents" => Object::string_literal(contents),
        })
    }

    fn page(&mut self, annots: Option<Object>) -> &mut Self {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if let Some(value) = annots {
            page.set("Annots", value);
        }
        let id = self.add(page);
        self.page_ids.push(id.into());
        self
    }

    fn page_with_refs(&mut self, refs: &[ObjectId]) -> &mut Self {
        let array: Vec<Object> = refs.iter().map(|&id| Object::Reference(id)).collect();
        self.page(Some(Object::Array(array)))
    }

    fn build(&mut self) -> Vec<u8> {
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.page_ids.clone(),
                "Count" => count,
            }),
        );
        let catalog_id = self.add(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        self.doc.save_to(&mut buf).unwrap();
        buf
    }
}

fn run(bytes: &[u8]) -> pdfannot_core::Extraction {
    let doc = LopdfBackend::open(bytes).unwrap();
    extract(&doc, "paper.pdf", &ExtractOptions::default())
}

// --- Tests ---

#[test]
fn zero_pages_yields_header_only() {
    let bytes = PdfBuilder::new().build();
    let result = run(&bytes);
    assert!(!result.found);
    assert_eq!(result.text, "PDF File: [[paper.pdf]]\n\n");
}

#[test]
fn pages_without_annots_find_nothing() {
    let bytes = PdfBuilder::new().page(None).page(None).build();
    assert!(!run(&bytes).found);
}

#[test]
fn single_text_annotation() {
    let mut b = PdfBuilder::new();
    let a = b.text_annot("hello");
    let bytes = b.page_with_refs(&[a]).build();

    let result = run(&bytes);
    assert!(result.found);
    assert_eq!(result.text, "PDF File: [[paper.pdf]]\n\n## Page 1\nhello\n\n");
}

#[test]
fn annotations_on_pages_two_and_five() {
    let mut b = PdfBuilder::new();
    // Create the page-5 annotation first so it gets the lower object number.
    let late = b.text_annot("on page five");
    let early = b.text_annot("on page two");
    b.page(None)
        .page_with_refs(&[early])
        .page(None)
        .page(None)
        .page_with_refs(&[late]);
    let bytes = b.build();

    let result = run(&bytes);
    let p2 = result.text.find("## Page 2").unwrap();
    let p5 = result.text.find("## Page 5").unwrap();
    assert!(p2 < p5);
    assert_eq!(result.text.matches("## Page").count(), 2);
}

#[test]
fn annotation_without_contents_contributes_nothing() {
    let mut b = PdfBuilder::new();
    let link = b.add(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![0.into(), 0.into(), 10.into(), 10.into()],
    });
    let bytes = b.page_with_refs(&[link]).build();
    let result = run(&bytes);
    assert!(!result.found);
}

#[test]
fn non_dictionary_entry_is_skipped() {
    let mut b = PdfBuilder::new();
    let bogus = b.add(Object::Integer(12));
    let good = b.text_annot("still here");
    let later = b.text_annot("next page");
    let bytes = b
        .page_with_refs(&[bogus, good])
        .page_with_refs(&[later])
        .build();

    let doc = LopdfBackend::open(&bytes).unwrap();
    let notes = collect_notes(&doc, &ExtractOptions::default());
    assert_eq!(notes.skipped, 1);
    assert_eq!(
        notes.entries,
        vec![
            NoteEntry {
                page_number: 1,
                text: "still here".into()
            },
            NoteEntry {
                page_number: 2,
                text: "next page".into()
            },
        ]
    );
}

#[test]
fn indirect_annots_array() {
    let mut b = PdfBuilder::new();
    let a = b.text_annot("behind an indirect array");
    let array = b.add(Object::Array(vec![Object::Reference(a)]));
    let bytes = b.page(Some(Object::Reference(array))).build();
    let result = run(&bytes);
    assert!(result.text.contains("## Page 1\nbehind an indirect array\n\n"));
}

#[test]
fn direct_annotation_dictionary_in_array() {
    let inline = Object::Dictionary(dictionary! {
        "Subtype" => "FreeText",
        "Contents" => Object::string_literal("inline annotation"),
    });
    let bytes = PdfBuilder::new()
        .page(Some(Object::Array(vec![inline])))
        .build();
    assert!(run(&bytes).text.contains("inline annotation"));
}

#[test]
fn utf16_hex_contents() {
    let mut encoded = vec![0xFE, 0xFF];
    for unit in "Überprüfen ✓".encode_utf16() {
        encoded.extend_from_slice(&unit.to_be_bytes());
    }
    let mut b = PdfBuilder::new();
    let a = b.add(dictionary! {
        "Subtype" => "Text",
        "Contents" => Object::String(encoded, StringFormat::Hexadecimal),
    });
    let bytes = b.page_with_refs(&[a]).build();
    assert!(run(&bytes).text.contains("## Page 1\nÜberprüfen ✓\n\n"));
}

#[test]
fn contents_stored_as_indirect_string() {
    let mut b = PdfBuilder::new();
    let text = b.add(Object::string_literal("indirect contents"));
    let a = b.add(dictionary! {
        "Subtype" => "Text",
        "Contents" => Object::Reference(text),
    });
    let bytes = b.page_with_refs(&[a]).build();
    assert!(run(&bytes).text.contains("indirect contents"));
}

#[test]
fn multiline_contents_are_kept_verbatim() {
    let mut b = PdfBuilder::new();
    let a = b.text_annot("line one\nline two");
    let bytes = b.page_with_refs(&[a]).build();
    assert!(run(&bytes).text.contains("## Page 1\nline one\nline two\n\n"));
}

#[test]
fn extraction_is_idempotent() {
    let mut b = PdfBuilder::new();
    let a = b.text_annot("first");
    let c = b.text_annot("second");
    let bytes = b.page_with_refs(&[a, c]).page(None).build();

    let doc = LopdfBackend::open(&bytes).unwrap();
    let opts = ExtractOptions::default();
    assert_eq!(
        extract(&doc, "paper.pdf", &opts),
        extract(&doc, "paper.pdf", &opts)
    );
}

#[test]
fn page_selection_through_open_document() {
    let mut b = PdfBuilder::new();
    let a = b.text_annot("one");
    let c = b.text_annot("two");
    let bytes = b.page_with_refs(&[a]).page_with_refs(&[c]).build();

    let opts = ExtractOptions::default().with_pages([1]);
    let doc = open_document(&bytes, None, &opts).unwrap();
    let notes = collect_notes(&doc, &opts);
    assert_eq!(notes.pages(), vec![2]);
}
