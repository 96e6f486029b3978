use std::path::Path;

use pdfannot_core::{AnnotationNotes, DocumentSource, collect_notes, render_note};

use crate::cli::{ShowFormat, UnicodeNormArg};
use crate::shared::{csv_escape, extract_options, open_pdf, pdf_file_name, resolve_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: &ShowFormat,
    unicode_norm: Option<&UnicodeNormArg>,
    password: Option<&str>,
    max_input_bytes: Option<usize>,
) -> Result<(), i32> {
    let file_name = pdf_file_name(file)?;
    let mut options = extract_options(unicode_norm, max_input_bytes);
    let doc = open_pdf(file, password, &options)?;
    options.pages = resolve_pages(pages, doc.page_count())?;
    let notes = collect_notes(&doc, &options);

    match format {
        ShowFormat::Markdown => {
            print!("{}", render_note(&file_name, &notes));
            Ok(())
        }
        ShowFormat::Json => write_json(&file_name, &notes),
        ShowFormat::Csv => {
            write_csv(&notes);
            Ok(())
        }
    }
}

fn notes_to_json(file_name: &str, notes: &AnnotationNotes) -> serde_json::Value {
    serde_json::json!({
        "file": file_name,
        "found": notes.found(),
        "entries": notes.entries,
        "skipped": notes.skipped,
    })
}

fn write_json(file_name: &str, notes: &AnnotationNotes) -> Result<(), i32> {
    let json_str = serde_json::to_string(&notes_to_json(file_name, notes)).map_err(|e| {
        eprintln!("Error: failed to serialize annotations: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(notes: &AnnotationNotes) {
    println!("page,text");
    for entry in &notes.entries {
        println!("{},{}", entry.page_number, csv_escape(&entry.text));
    }
}
