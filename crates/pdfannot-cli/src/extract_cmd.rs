use std::io;
use std::path::Path;

use pdfannot_core::{DocumentSource, attachment_link, extract, note_file_name};

use crate::cli::UnicodeNormArg;
use crate::shared::{extract_options, open_pdf, pdf_file_name, resolve_pages};
use crate::writer::NoteWriter;

/// Arguments of the `extract` subcommand.
pub struct ExtractArgs<'a> {
    pub file: &'a Path,
    pub vault: &'a Path,
    pub attachments: &'a str,
    pub pages: Option<&'a str>,
    pub unicode_norm: Option<&'a UnicodeNormArg>,
    pub password: Option<&'a str>,
    pub max_input_bytes: Option<usize>,
    pub force: bool,
    pub stdout: bool,
}

pub fn run(args: &ExtractArgs<'_>) -> Result<(), i32> {
    let file_name = pdf_file_name(args.file)?;
    let mut options = extract_options(args.unicode_norm, args.max_input_bytes);
    let doc = open_pdf(args.file, args.password, &options)?;
    options.pages = resolve_pages(args.pages, doc.page_count())?;

    let link = attachment_link(args.attachments, &file_name);
    let result = extract(&doc, &link, &options);

    if !result.found {
        eprintln!("No annotations found in the PDF.");
        return Ok(());
    }

    if args.stdout {
        print!("{}", result.text);
        return Ok(());
    }

    let writer = NoteWriter::new(args.vault).overwrite(args.force);
    let note_name = note_file_name(&file_name);
    match writer.write(&note_name, &result.text) {
        Ok(path) => {
            tracing::info!(note = %path.display(), "annotations extracted");
            println!("Annotations extracted to {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            eprintln!(
                "Error: note already exists: {} (use --force to overwrite)",
                writer.note_path(&note_name).display()
            );
            Err(1)
        }
        Err(e) => {
            eprintln!(
                "Error: failed to write note into {}: {e}",
                writer.vault().display()
            );
            Err(1)
        }
    }
}
