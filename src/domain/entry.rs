// src/domain/entry.rs
use serde::Serialize;

/// A glossary entry: a term with its definition and optional usage example.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i64,
    pub word_phrase: String,
    pub definition: String,
    pub example: Option<String>,
    pub unit_number: Option<i64>,
    pub views: i64,
    pub created_at: String,
    pub last_updated: String,
}

/// Field set for creating or editing an entry. Timestamps and the view
/// counter are owned by the store.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub word_phrase: String,
    pub definition: String,
    pub example: Option<String>,
    pub unit_number: Option<i64>,
}

impl Entry {
    /// Required fields must be non-blank for the entry to take part in
    /// quiz generation. Records failing this are skipped, not errors.
    pub fn is_well_formed(&self) -> bool {
        !self.word_phrase.trim().is_empty() && !self.definition.trim().is_empty()
    }
}
