// src/domain/note.rs
use serde::Serialize;

/// A free-form study note, optionally tagged to a course unit and
/// cross-linked to glossary entries.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub unit_number: Option<i64>,
    pub tags: Option<String>,
    /// Comma-separated glossary entry ids (e.g. "1,4,5"). A weak
    /// cross-reference with no integrity enforcement; resolve lazily
    /// via [`Note::related_entry_ids`] and a store lookup.
    pub related_entries: Option<String>,
    pub comments: Option<String>,
    pub views: i64,
    pub is_favorite: bool,
    pub created_at: String,
    pub last_updated: String,
}

/// Field set for creating a note.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub unit_number: Option<i64>,
    pub tags: Option<String>,
    pub related_entries: Option<String>,
    pub comments: Option<String>,
    pub is_favorite: bool,
}

impl Note {
    /// Parse the weak cross-reference list. Malformed fragments are
    /// dropped silently; a dangling id is the lookup's problem.
    pub fn related_entry_ids(&self) -> Vec<i64> {
        self.related_entries
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect()
    }

    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with_related(related: Option<&str>) -> Note {
        Note {
            id: 1,
            title: "Contract formation".to_string(),
            content: "Offer, acceptance, consideration.".to_string(),
            unit_number: Some(2),
            tags: None,
            related_entries: related.map(|s| s.to_string()),
            comments: None,
            views: 0,
            is_favorite: false,
            created_at: "2026-01-01".to_string(),
            last_updated: "2026-01-01".to_string(),
        }
    }

    #[test]
    fn given_comma_list_when_parsing_related_ids_then_returns_ids() {
        let note = note_with_related(Some("1, 4,5"));
        assert_eq!(note.related_entry_ids(), vec![1, 4, 5]);
    }

    #[test]
    fn given_no_related_entries_when_parsing_then_returns_empty() {
        let note = note_with_related(None);
        assert!(note.related_entry_ids().is_empty());
    }

    #[test]
    fn given_garbage_fragments_when_parsing_then_drops_them() {
        let note = note_with_related(Some("3,abc,,7"));
        assert_eq!(note.related_entry_ids(), vec![3, 7]);
    }
}
