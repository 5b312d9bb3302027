//! File-backed note store: one TOML file per note, named after its id.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::models::{DEFAULT_CODE_LENGTH, Note, is_valid_code, random_code};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Note not found: {0}")]
    NotFound(String),
    #[error("Invalid edit code for note {0}")]
    InvalidEditCode(String),
    #[error("Invalid note id: {0:?}")]
    InvalidId(String),
    #[error("No free note id after {0} attempts")]
    IdSpaceExhausted(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize note: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to parse note at {path}: {source}")]
    Deserialize {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
    id_length: usize,
    edit_code_length: usize,
}

impl NoteStore {
    pub const EXTENSION: &'static str = "toml";
    const MAX_ATTEMPTS: usize = 16;

    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            id_length: DEFAULT_CODE_LENGTH,
            edit_code_length: DEFAULT_CODE_LENGTH,
        })
    }

    pub fn with_lengths(mut self, id_length: usize, edit_code_length: usize) -> Self {
        self.id_length = id_length.max(1);
        self.edit_code_length = edit_code_length.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_code(id) {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(id).with_extension(Self::EXTENSION))
    }

    /// Stores `content` under a fresh id with a fresh edit code.
    pub fn create(&self, content: &str) -> Result<Note, StoreError> {
        for _ in 0..Self::MAX_ATTEMPTS {
            let note = Note::new(
                random_code(self.id_length),
                content,
                random_code(self.edit_code_length),
            );
            let text = toml::to_string(&note)?;
            let path = self.path_for(&note.id)?;

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    write_or_remove(&path, &mut file, text.as_bytes())?;
                    log::info!("created note {}", note.id);
                    return Ok(note);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    log::debug!("note id {} already taken, retrying", note.id);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(StoreError::IdSpaceExhausted(Self::MAX_ATTEMPTS))
    }

    pub fn get(&self, id: &str) -> Result<Note, StoreError> {
        let path = self.path_for(id)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&text).map_err(|source| StoreError::Deserialize { path, source })
    }

    /// Whether `edit_code` unlocks the note.
    pub fn verify(&self, id: &str, edit_code: &str) -> Result<bool, StoreError> {
        Ok(self.get(id)?.accepts(edit_code))
    }

    fn unlock(&self, id: &str, edit_code: &str) -> Result<Note, StoreError> {
        let note = self.get(id)?;
        if !note.accepts(edit_code) {
            log::warn!("rejected edit code for note {id}");
            return Err(StoreError::InvalidEditCode(id.to_string()));
        }
        Ok(note)
    }

    pub fn update(&self, id: &str, edit_code: &str, content: &str) -> Result<Note, StoreError> {
        let mut note = self.unlock(id, edit_code)?;
        note.set_content(content);
        fs::write(self.path_for(id)?, toml::to_string(&note)?)?;
        log::info!("updated note {id}");
        Ok(note)
    }

    pub fn delete(&self, id: &str, edit_code: &str) -> Result<(), StoreError> {
        self.unlock(id, edit_code)?;
        fs::remove_file(self.path_for(id)?)?;
        log::info!("deleted note {id}");
        Ok(())
    }
}

/// Writes a freshly created note file; a failed write removes the file so
/// no partial note is left behind under a taken id.
fn write_or_remove(path: &Path, file: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    if let Err(e) = file.write_all(bytes).and_then(|()| file.flush()) {
        if let Err(remove) = fs::remove_file(path) {
            log::warn!("could not remove partial note {}: {remove}", path.display());
        }
        return Err(e);
    }
    Ok(())
}
