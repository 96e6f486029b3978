//! Persists generated notes into the vault directory.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes notes below a vault directory.
///
/// Notes are created exclusively: an existing file is left untouched and
/// reported as [`io::ErrorKind::AlreadyExists`] unless overwriting is allowed.
#[derive(Debug, Clone)]
pub struct NoteWriter {
    vault: PathBuf,
    overwrite: bool,
}

impl NoteWriter {
    pub fn new(vault: impl Into<PathBuf>) -> Self {
        Self {
            vault: vault.into(),
            overwrite: false,
        }
    }

    /// Allow replacing an existing note.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Filesystem path for a vault-relative, `/`-separated note path.
    pub fn note_path(&self, note_name: &str) -> PathBuf {
        note_name
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.vault.clone(), |path, part| path.join(part))
    }

    /// Write `text` to the note and return the path written.
    pub fn write(&self, note_name: &str, text: &str) -> io::Result<PathBuf> {
        let path = self.note_path(note_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true);
        if self.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(&path)?;
        file.write_all(text.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote note");
        Ok(path)
    }

    pub fn vault(&self) -> &Path {
        &self.vault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_path_joins_components() {
        let writer = NoteWriter::new("/vault");
        assert_eq!(
            writer.note_path("Annotations of a.pdf.md"),
            PathBuf::from("/vault/Annotations of a.pdf.md")
        );
        assert_eq!(
            writer.note_path("notes/x.md"),
            PathBuf::from("/vault/notes/x.md")
        );
    }

    #[test]
    fn writes_new_note_and_creates_vault() {
        let dir = tempfile::tempdir().unwrap();
        let vault = dir.path().join("vault");
        let path = NoteWriter::new(&vault).write("note.md", "body").unwrap();
        assert_eq!(path, vault.join("note.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "body");
    }

    #[test]
    fn refuses_to_overwrite_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let writer = NoteWriter::new(dir.path());
        writer.write("note.md", "first").unwrap();
        let err = writer.write("note.md", "second").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(
            fs::read_to_string(dir.path().join("note.md")).unwrap(),
            "first"
        );
    }

    #[test]
    fn overwrite_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let writer = NoteWriter::new(dir.path()).overwrite(true);
        writer.write("note.md", "a much longer first body").unwrap();
        writer.write("note.md", "short").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("note.md")).unwrap(),
            "short"
        );
    }
}
