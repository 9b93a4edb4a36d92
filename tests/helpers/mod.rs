use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

use studydeck::application::{EntryRepository, NoteRepository};
use studydeck::domain::entry::EntryDraft;
use studydeck::domain::note::NoteDraft;
use studydeck::infrastructure::{SqliteEntryStore, SqliteNoteStore};

/// Test fixture owning a temporary data directory with both stores.
#[allow(dead_code)]
pub struct TestStores {
    _temp_dir: TempDir,
    pub entry_db: PathBuf,
    pub note_db: PathBuf,
}

#[allow(dead_code)]
impl TestStores {
    /// Create empty stores in a fresh temp directory.
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let entry_db = temp_dir.path().join("dictionary.db");
        let note_db = temp_dir.path().join("notes.db");

        // Opening creates the schema.
        SqliteEntryStore::open(&entry_db)?;
        SqliteNoteStore::open(&note_db)?;

        Ok(Self {
            _temp_dir: temp_dir,
            entry_db,
            note_db,
        })
    }

    /// Create stores pre-seeded with a small law-glossary fixture, all in
    /// unit 1.
    pub fn seeded() -> Result<Self> {
        let stores = Self::new()?;

        let mut entries = stores.open_entry_store()?;
        for (word, definition, example) in FIXTURE_ENTRIES {
            entries.add_entry(EntryDraft {
                word_phrase: word.to_string(),
                definition: definition.to_string(),
                example: example.map(|s| s.to_string()),
                unit_number: Some(1),
            })?;
        }

        let mut notes = stores.open_note_store()?;
        for (title, content) in FIXTURE_NOTES {
            notes.add_note(NoteDraft {
                title: title.to_string(),
                content: content.to_string(),
                unit_number: Some(1),
                ..Default::default()
            })?;
        }

        Ok(stores)
    }

    pub fn open_entry_store(&self) -> Result<SqliteEntryStore> {
        SqliteEntryStore::open(&self.entry_db)
    }

    pub fn open_note_store(&self) -> Result<SqliteNoteStore> {
        SqliteNoteStore::open(&self.note_db)
    }
}

/// (word_phrase, definition, example)
#[allow(dead_code)]
pub const FIXTURE_ENTRIES: [(&str, &str, Option<&str>); 5] = [
    (
        "contract",
        "A legally binding agreement between parties",
        Some("She signed the contract without reading it."),
    ),
    (
        "contract law",
        "The body of law governing agreements",
        None,
    ),
    (
        "tort",
        "A civil wrong giving rise to liability",
        Some("A tort is a civil wrong."),
    ),
    (
        "consideration",
        "Something of value exchanged in a contract",
        None,
    ),
    (
        "estoppel",
        "A bar preventing a party from contradicting itself",
        None,
    ),
];

/// (title, content)
#[allow(dead_code)]
pub const FIXTURE_NOTES: [(&str, &str); 2] = [
    (
        "Contract formation",
        "Offer, acceptance, consideration and intention to create legal relations.",
    ),
    (
        "Negligence",
        "Duty of care, breach, causation and damages must all be established.",
    ),
];
