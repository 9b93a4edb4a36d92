// src/application/repository.rs
use crate::domain::entry::EntryDraft;
use crate::domain::note::NoteDraft;
use crate::domain::{DomainError, Entry, Note};

/// Port onto the glossary store. Records are never structurally deleted.
pub trait EntryRepository {
    /// Insert a new entry, returning its id. Fails with
    /// [`DomainError::DuplicateWordPhrase`] on a word/phrase collision.
    fn add_entry(&mut self, draft: EntryDraft) -> Result<i64, DomainError>;

    fn get_entry(&mut self, id: i64) -> Result<Entry, DomainError>;

    /// Overwrite the editable fields of an entry. The store refreshes
    /// `last_updated`.
    fn update_entry(&mut self, id: i64, draft: EntryDraft) -> Result<(), DomainError>;

    /// Increment the view counter.
    fn record_entry_view(&mut self, id: i64) -> Result<(), DomainError>;

    /// All entries, ordered by word/phrase ascending.
    fn list_entries(&mut self) -> Result<Vec<Entry>, DomainError>;

    fn entries_by_unit(&mut self, unit_number: i64) -> Result<Vec<Entry>, DomainError>;
}

/// Port onto the note store.
pub trait NoteRepository {
    fn add_note(&mut self, draft: NoteDraft) -> Result<i64, DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    fn record_note_view(&mut self, id: i64) -> Result<(), DomainError>;

    /// All notes, most recently updated first.
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn notes_by_unit(&mut self, unit_number: i64) -> Result<Vec<Note>, DomainError>;

    fn set_favorite(&mut self, id: i64, is_favorite: bool) -> Result<(), DomainError>;
}
