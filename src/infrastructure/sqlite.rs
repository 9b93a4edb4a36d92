// src/infrastructure/sqlite.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use tracing::{debug, info, instrument};

use crate::application::repository::{EntryRepository, NoteRepository};
use crate::domain::entry::EntryDraft;
use crate::domain::note::NoteDraft;
use crate::domain::{DomainError, Entry, Note};

const ENTRY_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word_phrase TEXT NOT NULL UNIQUE,
    definition TEXT NOT NULL,
    example TEXT,
    unit_number INTEGER,
    views INTEGER DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_entries_unit ON entries(unit_number);
CREATE TRIGGER IF NOT EXISTS update_entries_timestamp
AFTER UPDATE ON entries
BEGIN
    UPDATE entries SET last_updated = CURRENT_TIMESTAMP WHERE id = NEW.id;
END;
"#;

const NOTE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    unit_number INTEGER,
    tags TEXT,
    related_entries TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    views INTEGER DEFAULT 0,
    is_favorite BOOLEAN DEFAULT 0,
    comments TEXT
);
CREATE INDEX IF NOT EXISTS idx_notes_unit ON notes(unit_number);
CREATE INDEX IF NOT EXISTS idx_notes_favorite ON notes(is_favorite);
CREATE TRIGGER IF NOT EXISTS update_notes_timestamp
AFTER UPDATE ON notes
BEGIN
    UPDATE notes SET last_updated = CURRENT_TIMESTAMP WHERE id = NEW.id;
END;
"#;

fn storage_err(err: rusqlite::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Glossary store backed by a SQLite file (`dictionary.db`). Creates the
/// schema on open.
pub struct SqliteEntryStore {
    conn: Connection,
}

impl SqliteEntryStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Opening entry store");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open entry store at {}", path.display()))?;
        conn.execute_batch(ENTRY_SCHEMA)
            .context("Failed to initialize entry schema")?;

        info!(?path, "Opened entry store");
        Ok(Self { conn })
    }

    fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<Entry> {
        Ok(Entry {
            id: row.get("id")?,
            word_phrase: row.get("word_phrase")?,
            definition: row.get("definition")?,
            example: row.get("example")?,
            unit_number: row.get("unit_number")?,
            views: row.get::<_, Option<i64>>("views")?.unwrap_or(0),
            created_at: row.get("created_at")?,
            last_updated: row.get("last_updated")?,
        })
    }
}

const ENTRY_COLUMNS: &str =
    "id, word_phrase, definition, example, unit_number, views, created_at, last_updated";

impl EntryRepository for SqliteEntryStore {
    #[instrument(level = "debug", skip(self, draft), fields(word_phrase = %draft.word_phrase))]
    fn add_entry(&mut self, draft: EntryDraft) -> Result<i64, DomainError> {
        let result = self.conn.execute(
            "INSERT INTO entries (word_phrase, definition, example, unit_number)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.word_phrase,
                draft.definition,
                draft.example,
                draft.unit_number
            ],
        );

        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!(id, "Added entry");
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => {
                Err(DomainError::DuplicateWordPhrase(draft.word_phrase))
            }
            Err(err) => Err(storage_err(err)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn get_entry(&mut self, id: i64) -> Result<Entry, DomainError> {
        self.conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                params![id],
                Self::row_to_entry,
            )
            .optional()
            .map_err(storage_err)?
            .ok_or(DomainError::EntryNotFound(id))
    }

    #[instrument(level = "debug", skip(self, draft))]
    fn update_entry(&mut self, id: i64, draft: EntryDraft) -> Result<(), DomainError> {
        let result = self.conn.execute(
            "UPDATE entries
             SET word_phrase = ?1, definition = ?2, example = ?3, unit_number = ?4
             WHERE id = ?5",
            params![
                draft.word_phrase,
                draft.definition,
                draft.example,
                draft.unit_number,
                id
            ],
        );

        match result {
            Ok(0) => Err(DomainError::EntryNotFound(id)),
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(DomainError::DuplicateWordPhrase(draft.word_phrase))
            }
            Err(err) => Err(storage_err(err)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn record_entry_view(&mut self, id: i64) -> Result<(), DomainError> {
        let changed = self
            .conn
            .execute(
                "UPDATE entries SET views = COALESCE(views, 0) + 1 WHERE id = ?1",
                params![id],
            )
            .map_err(storage_err)?;
        if changed == 0 {
            return Err(DomainError::EntryNotFound(id));
        }
        Ok(())
    }

    fn list_entries(&mut self) -> Result<Vec<Entry>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY word_phrase ASC"
            ))
            .map_err(storage_err)?;
        let entries = stmt
            .query_map([], Self::row_to_entry)
            .map_err(storage_err)?
            .collect::<rusqlite::Result<Vec<Entry>>>()
            .map_err(storage_err)?;
        Ok(entries)
    }

    fn entries_by_unit(&mut self, unit_number: i64) -> Result<Vec<Entry>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM entries WHERE unit_number = ?1 ORDER BY word_phrase ASC"
            ))
            .map_err(storage_err)?;
        let entries = stmt
            .query_map(params![unit_number], Self::row_to_entry)
            .map_err(storage_err)?
            .collect::<rusqlite::Result<Vec<Entry>>>()
            .map_err(storage_err)?;
        Ok(entries)
    }
}

/// Note store backed by a SQLite file (`notes.db`). Creates the schema on
/// open. Schema mirrors the entry store's conventions: timestamp trigger,
/// unit index, view counter.
pub struct SqliteNoteStore {
    conn: Connection,
}

impl SqliteNoteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Opening note store");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open note store at {}", path.display()))?;
        conn.execute_batch(NOTE_SCHEMA)
            .context("Failed to initialize note schema")?;

        info!(?path, "Opened note store");
        Ok(Self { conn })
    }

    fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
        Ok(Note {
            id: row.get("id")?,
            title: row.get("title")?,
            content: row.get("content")?,
            unit_number: row.get("unit_number")?,
            tags: row.get("tags")?,
            related_entries: row.get("related_entries")?,
            comments: row.get("comments")?,
            views: row.get::<_, Option<i64>>("views")?.unwrap_or(0),
            is_favorite: row.get::<_, Option<bool>>("is_favorite")?.unwrap_or(false),
            created_at: row.get("created_at")?,
            last_updated: row.get("last_updated")?,
        })
    }
}

const NOTE_COLUMNS: &str = "id, title, content, unit_number, tags, related_entries, \
                            comments, views, is_favorite, created_at, last_updated";

impl NoteRepository for SqliteNoteStore {
    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    fn add_note(&mut self, draft: NoteDraft) -> Result<i64, DomainError> {
        self.conn
            .execute(
                "INSERT INTO notes (title, content, unit_number, tags, related_entries, comments, is_favorite)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    draft.title,
                    draft.content,
                    draft.unit_number,
                    draft.tags,
                    draft.related_entries,
                    draft.comments,
                    draft.is_favorite
                ],
            )
            .map_err(storage_err)?;
        let id = self.conn.last_insert_rowid();
        info!(id, "Added note");
        Ok(id)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                params![id],
                Self::row_to_note,
            )
            .optional()
            .map_err(storage_err)?
            .ok_or(DomainError::NoteNotFound(id))
    }

    #[instrument(level = "debug", skip(self))]
    fn record_note_view(&mut self, id: i64) -> Result<(), DomainError> {
        let changed = self
            .conn
            .execute(
                "UPDATE notes SET views = COALESCE(views, 0) + 1 WHERE id = ?1",
                params![id],
            )
            .map_err(storage_err)?;
        if changed == 0 {
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(())
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {NOTE_COLUMNS} FROM notes ORDER BY last_updated DESC, id DESC"
            ))
            .map_err(storage_err)?;
        let notes = stmt
            .query_map([], Self::row_to_note)
            .map_err(storage_err)?
            .collect::<rusqlite::Result<Vec<Note>>>()
            .map_err(storage_err)?;
        Ok(notes)
    }

    fn notes_by_unit(&mut self, unit_number: i64) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {NOTE_COLUMNS} FROM notes WHERE unit_number = ?1 ORDER BY title ASC"
            ))
            .map_err(storage_err)?;
        let notes = stmt
            .query_map(params![unit_number], Self::row_to_note)
            .map_err(storage_err)?
            .collect::<rusqlite::Result<Vec<Note>>>()
            .map_err(storage_err)?;
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn set_favorite(&mut self, id: i64, is_favorite: bool) -> Result<(), DomainError> {
        let changed = self
            .conn
            .execute(
                "UPDATE notes SET is_favorite = ?1 WHERE id = ?2",
                params![is_favorite, id],
            )
            .map_err(storage_err)?;
        if changed == 0 {
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(())
    }
}
