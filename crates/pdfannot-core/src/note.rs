//! Note naming and vault path helpers.
//!
//! Paths here are vault-relative, `/`-separated strings, not filesystem
//! paths. They appear verbatim in the note's `[[...]]` link.

use std::sync::LazyLock;

use regex::Regex;

use crate::unicode_norm::UnicodeNorm;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]+").expect("valid separator regex"));
static EDGE_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/+|/+$").expect("valid edge regex"));
static NARROW_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{00A0}\u{202F}]").expect("valid space regex"));

/// Normalize a vault-relative path.
///
/// Runs of `/` or `\` collapse to a single `/`, leading and trailing slashes
/// are removed, non-breaking spaces become plain spaces, and the result is
/// NFC-normalized. An empty result is the vault root, `/`.
pub fn normalize_path(path: &str) -> String {
    let path = SEPARATOR_RUN.replace_all(path, "/");
    let path = EDGE_SLASHES.replace_all(&path, "");
    if path.is_empty() {
        return "/".to_string();
    }
    let path = NARROW_SPACES.replace_all(&path, " ");
    UnicodeNorm::Nfc.normalize(&path)
}

/// The vault path the PDF is linked under from the note header.
///
/// A blank `attachments_path` means the vault root.
pub fn attachment_link(attachments_path: &str, file_name: &str) -> String {
    let attachments = attachments_path.trim();
    if attachments.is_empty() {
        file_name.to_string()
    } else {
        normalize_path(&format!("{attachments}/{file_name}"))
    }
}

/// File name of the generated note for a PDF called `file_name`.
pub fn note_file_name(file_name: &str) -> String {
    normalize_path(&format!("Annotations of {file_name}.md"))
}
