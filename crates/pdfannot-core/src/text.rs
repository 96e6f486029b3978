//! Decoding of PDF text strings.
//!
//! PDF text strings (`/Contents`, `/T`, ...) are either UTF-16 with a byte
//! order mark, UTF-8 (PDF 2.0, optionally with a BOM), or a single-byte
//! PDFDocEncoding string. PDFDocEncoding is approximated with Windows-1252,
//! which agrees with it on the printable Latin range.

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::object::PdfObject;

const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode the raw bytes of a PDF string object into text.
///
/// Malformed sequences are replaced with U+FFFD rather than rejected.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return UTF_16BE.decode_without_bom_handling(rest).0.into_owned();
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return UTF_16LE.decode_without_bom_handling(rest).0.into_owned();
    }
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return UTF_8.decode_without_bom_handling(rest).0.into_owned();
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
    }
}

/// Convert a direct object to display text.
///
/// Strings are decoded and names yield their text. Every other variant,
/// including unresolved references, is not text.
pub fn object_text(object: &PdfObject) -> Option<String> {
    match object {
        PdfObject::String(bytes) => Some(decode_text_string(bytes)),
        PdfObject::Name(name) => Some(name.clone()),
        _ => None,
    }
}
