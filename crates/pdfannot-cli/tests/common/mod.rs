//! Helpers shared by the CLI integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, Permissions, StringFormat, dictionary,
};

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pdfannot").unwrap();
    cmd.env_remove("PDFANNOT_VAULT")
        .env_remove("PDFANNOT_ATTACHMENTS")
        .env_remove("RUST_LOG");
    cmd
}

/// Build a PDF whose pages carry text annotations with the given contents.
///
/// Each inner slice is one page; an empty slice is a page without `/Annots`.
pub fn pdf_with_comments(pages: &[&[&str]]) -> Vec<u8> {
    save(document_with_comments(pages))
}

/// Like [`pdf_with_comments`], encrypted with 128-bit RC4 under `user_password`.
pub fn encrypted_pdf_with_comments(user_password: &str, pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = document_with_comments(pages);
    let file_id = b"pdfannot-cli-test".to_vec();
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
    .unwrap();
    doc.encrypt(&state).unwrap();
    save(doc)
}

fn document_with_comments(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for comments in pages {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        if !comments.is_empty() {
            let annots: Vec<Object> = comments
                .iter()
                .map(|text| {
                    Object::Reference(doc.add_object(dictionary! {
                        "Type" => "Annot",
                        "Subtype" => "Text",
                        "Rect" => vec![100.into(), 700.into(), 120.into(), 720.into()],
                        "Contents" => Object::string_literal(*text),
                    }))
                })
                .collect();
            page.set("Annots", annots);
        }
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_pdf(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
