// src/domain/search.rs
use serde::Serialize;

use crate::domain::{Entry, Note};

/// Which store a unified search result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Entry,
    Note,
}

/// A record projected down to the two text fields the ranking engine
/// reads, regardless of store-specific column names.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: i64,
    pub primary_text: String,
    pub secondary_text: String,
}

impl From<&Entry> for Candidate {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            primary_text: entry.word_phrase.clone(),
            secondary_text: entry.definition.clone(),
        }
    }
}

impl From<&Note> for Candidate {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            primary_text: note.title.clone(),
            secondary_text: note.content.clone(),
        }
    }
}

/// Transient, ordered projection of a matched record. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: i64,
    pub primary_text: String,
    pub secondary_text: String,
    pub relevance: u32,
}
