// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::repository::{EntryRepository, NoteRepository};
use crate::domain::entry::EntryDraft;
use crate::domain::note::NoteDraft;
use crate::domain::{DomainError, Entry, Note};

/// Minimal well-formed entry for tests.
pub fn entry_fixture(id: i64, word: &str, definition: &str) -> Entry {
    Entry {
        id,
        word_phrase: word.to_string(),
        definition: definition.to_string(),
        example: None,
        unit_number: Some(1),
        views: 0,
        created_at: "2026-01-01".to_string(),
        last_updated: "2026-01-01".to_string(),
    }
}

/// Minimal well-formed note for tests.
pub fn note_fixture(id: i64, title: &str, content: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        unit_number: Some(1),
        tags: None,
        related_entries: None,
        comments: None,
        views: 0,
        is_favorite: false,
        created_at: "2026-01-01".to_string(),
        last_updated: "2026-01-01".to_string(),
    }
}

/// Shared in-memory mock of the glossary store for use cases that depend
/// on [`EntryRepository`], eliminating the need for each test file to
/// define its own mock.
///
/// # Examples
///
/// ```
/// use studydeck::util::testing::{entry_fixture, MockEntryRepository};
///
/// let mock = MockEntryRepository::builder()
///     .with_entry(entry_fixture(1, "tort", "A civil wrong"))
///     .build();
/// ```
pub struct MockEntryRepository {
    entries: HashMap<i64, Entry>,
    next_id: i64,
}

impl MockEntryRepository {
    pub fn builder() -> MockEntryRepositoryBuilder {
        MockEntryRepositoryBuilder::new()
    }
}

impl EntryRepository for MockEntryRepository {
    fn add_entry(&mut self, draft: EntryDraft) -> Result<i64, DomainError> {
        if self
            .entries
            .values()
            .any(|e| e.word_phrase == draft.word_phrase)
        {
            return Err(DomainError::DuplicateWordPhrase(draft.word_phrase));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                id,
                word_phrase: draft.word_phrase,
                definition: draft.definition,
                example: draft.example,
                unit_number: draft.unit_number,
                views: 0,
                created_at: "2026-01-01".to_string(),
                last_updated: "2026-01-01".to_string(),
            },
        );
        Ok(id)
    }

    fn get_entry(&mut self, id: i64) -> Result<Entry, DomainError> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or(DomainError::EntryNotFound(id))
    }

    fn update_entry(&mut self, id: i64, draft: EntryDraft) -> Result<(), DomainError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(DomainError::EntryNotFound(id))?;
        entry.word_phrase = draft.word_phrase;
        entry.definition = draft.definition;
        entry.example = draft.example;
        entry.unit_number = draft.unit_number;
        entry.last_updated = "2026-01-02".to_string();
        Ok(())
    }

    fn record_entry_view(&mut self, id: i64) -> Result<(), DomainError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(DomainError::EntryNotFound(id))?;
        entry.views += 1;
        Ok(())
    }

    fn list_entries(&mut self) -> Result<Vec<Entry>, DomainError> {
        let mut entries: Vec<Entry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.word_phrase.cmp(&b.word_phrase));
        Ok(entries)
    }

    fn entries_by_unit(&mut self, unit_number: i64) -> Result<Vec<Entry>, DomainError> {
        Ok(self
            .entries
            .values()
            .filter(|e| e.unit_number == Some(unit_number))
            .cloned()
            .collect())
    }
}

pub struct MockEntryRepositoryBuilder {
    entries: HashMap<i64, Entry>,
}

impl MockEntryRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Seed an entry retrievable by id.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.insert(entry.id, entry);
        self
    }

    pub fn build(self) -> MockEntryRepository {
        let next_id = self.entries.keys().max().copied().unwrap_or(0) + 1;
        MockEntryRepository {
            entries: self.entries,
            next_id,
        }
    }
}

impl Default for MockEntryRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared in-memory mock of the note store.
pub struct MockNoteRepository {
    notes: HashMap<i64, Note>,
    next_id: i64,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }
}

impl NoteRepository for MockNoteRepository {
    fn add_note(&mut self, draft: NoteDraft) -> Result<i64, DomainError> {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(
            id,
            Note {
                id,
                title: draft.title,
                content: draft.content,
                unit_number: draft.unit_number,
                tags: draft.tags,
                related_entries: draft.related_entries,
                comments: draft.comments,
                views: 0,
                is_favorite: draft.is_favorite,
                created_at: "2026-01-01".to_string(),
                last_updated: "2026-01-01".to_string(),
            },
        );
        Ok(id)
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn record_note_view(&mut self, id: i64) -> Result<(), DomainError> {
        let note = self
            .notes
            .get_mut(&id)
            .ok_or(DomainError::NoteNotFound(id))?;
        note.views += 1;
        Ok(())
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let mut notes: Vec<Note> = self.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.last_updated.cmp(&a.last_updated).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    fn notes_by_unit(&mut self, unit_number: i64) -> Result<Vec<Note>, DomainError> {
        Ok(self
            .notes
            .values()
            .filter(|n| n.unit_number == Some(unit_number))
            .cloned()
            .collect())
    }

    fn set_favorite(&mut self, id: i64, is_favorite: bool) -> Result<(), DomainError> {
        let note = self
            .notes
            .get_mut(&id)
            .ok_or(DomainError::NoteNotFound(id))?;
        note.is_favorite = is_favorite;
        Ok(())
    }
}

pub struct MockNoteRepositoryBuilder {
    notes: HashMap<i64, Note>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: HashMap::new(),
        }
    }

    /// Seed a note retrievable by id.
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.insert(note.id, note);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        let next_id = self.notes.keys().max().copied().unwrap_or(0) + 1;
        MockNoteRepository {
            notes: self.notes,
            next_id,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["rusqlite"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_entry_added_when_getting_entry_then_returns_entry() {
        let mut mock = MockEntryRepository::builder()
            .with_entry(entry_fixture(123, "tort", "A civil wrong"))
            .build();

        let result = mock.get_entry(123).expect("Entry should exist");
        assert_eq!(result.id, 123);
        assert_eq!(result.word_phrase, "tort");
    }

    #[test]
    fn given_no_entry_when_getting_entry_then_returns_error() {
        let mut mock = MockEntryRepository::builder().build();

        let result = mock.get_entry(999);
        assert!(matches!(result, Err(DomainError::EntryNotFound(999))));
    }

    #[test]
    fn given_duplicate_word_when_adding_entry_then_returns_error() {
        let mut mock = MockEntryRepository::builder()
            .with_entry(entry_fixture(1, "tort", "A civil wrong"))
            .build();

        let result = mock.add_entry(EntryDraft {
            word_phrase: "tort".to_string(),
            definition: "duplicate".to_string(),
            ..Default::default()
        });

        assert!(matches!(result, Err(DomainError::DuplicateWordPhrase(_))));
    }

    #[test]
    fn given_seeded_entries_when_listing_then_ordered_by_word_phrase() {
        let mut mock = MockEntryRepository::builder()
            .with_entry(entry_fixture(1, "tort", "A civil wrong"))
            .with_entry(entry_fixture(2, "contract", "An agreement"))
            .build();

        let entries = mock.list_entries().expect("List should succeed");
        assert_eq!(entries[0].word_phrase, "contract");
        assert_eq!(entries[1].word_phrase, "tort");
    }

    #[test]
    fn given_note_added_when_recording_view_then_counter_increments() {
        let mut mock = MockNoteRepository::builder()
            .with_note(note_fixture(1, "Negligence", "Elements of the claim"))
            .build();

        mock.record_note_view(1).expect("Record should succeed");
        let note = mock.get_note(1).expect("Note should exist");
        assert_eq!(note.views, 1);
    }
}
