// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entry not found: {0}")]
    EntryNotFound(i64),
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Word/phrase already exists: {0}")]
    DuplicateWordPhrase(String),
    #[error("{0} are required")]
    MissingFields(&'static str),
    #[error("Storage error: {0}")]
    Storage(String),
}
