use std::path::Path;

use pdfannot_core::{ExtractOptions, PdfError};
use pdfannot_parse::LopdfDocument;

use crate::cli::UnicodeNormArg;
use crate::page_range::parse_page_range;

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found,
/// cannot be parsed as a valid PDF, or needs a (different) password.
pub fn open_pdf(
    file: &Path,
    password: Option<&str>,
    options: &ExtractOptions,
) -> Result<LopdfDocument, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    pdfannot_parse::open_file(file, password, options).map_err(|e| {
        match e {
            PdfError::PasswordRequired => {
                eprintln!("Error: failed to open PDF: {e} (use --password)");
            }
            _ => eprintln!("Error: failed to open PDF: {e}"),
        }
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// If `pages` is `None`, returns `None` (every page).
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Option<Vec<usize>>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map(Some).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok(None),
    }
}

/// Build extraction options from the shared command-line flags.
///
/// The page selection is filled in once the document is open.
pub fn extract_options(
    unicode_norm: Option<&UnicodeNormArg>,
    max_input_bytes: Option<usize>,
) -> ExtractOptions {
    ExtractOptions {
        unicode_norm: unicode_norm
            .map(UnicodeNormArg::to_unicode_norm)
            .unwrap_or_default(),
        pages: None,
        max_input_bytes,
    }
}

/// The PDF's file name, as used for the note name and header link.
pub fn pdf_file_name(file: &Path) -> Result<String, i32> {
    match file.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => {
            eprintln!("Error: not a file path: {}", file.display());
            Err(1)
        }
    }
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
