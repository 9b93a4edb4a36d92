// src/application/search_service.rs
use serde::Serialize;
use tracing::debug;

use crate::application::ranking::{self, rank};
use crate::application::repository::{EntryRepository, NoteRepository};
use crate::constants::{RELATED_TERMS_LIMIT, SEARCH_LIMIT, UNIFIED_SEARCH_LIMIT};
use crate::domain::{Candidate, DomainError, Scope, SearchResult};

/// A search result tagged with the store it came from, for unified
/// cross-store searches.
#[derive(Debug, Clone, Serialize)]
pub struct ScopedResult {
    pub scope: Scope,
    #[serde(flatten)]
    pub result: SearchResult,
}

/// Result-set caps, defaulting to the application constants but
/// overridable from the config file.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub results: usize,
    pub unified: usize,
    pub related: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            results: SEARCH_LIMIT,
            unified: UNIFIED_SEARCH_LIMIT,
            related: RELATED_TERMS_LIMIT,
        }
    }
}

/// Use case: ranked search over the glossary and note stores.
pub struct SearchService<E: EntryRepository, N: NoteRepository> {
    entries: E,
    notes: N,
    limits: SearchLimits,
}

impl<E: EntryRepository, N: NoteRepository> SearchService<E, N> {
    pub fn new(entries: E, notes: N) -> Self {
        Self {
            entries,
            notes,
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(entries: E, notes: N, limits: SearchLimits) -> Self {
        Self {
            entries,
            notes,
            limits,
        }
    }

    /// Ranked search over glossary entries.
    pub fn search_entries(&mut self, query: &str) -> Result<Vec<SearchResult>, DomainError> {
        let candidates = self.entry_candidates()?;
        Ok(rank(query, &candidates, self.limits.results))
    }

    /// Ranked search over notes.
    pub fn search_notes(&mut self, query: &str) -> Result<Vec<SearchResult>, DomainError> {
        let candidates = self.note_candidates()?;
        Ok(rank(query, &candidates, self.limits.results))
    }

    /// Ranked search across both stores. Each store is ranked with the
    /// same query, then the two lists are merged under the identical
    /// ordering and truncated.
    pub fn search_all(&mut self, query: &str) -> Result<Vec<ScopedResult>, DomainError> {
        let entry_hits = rank(query, &self.entry_candidates()?, self.limits.unified);
        let note_hits = rank(query, &self.note_candidates()?, self.limits.unified);
        debug!(
            entries = entry_hits.len(),
            notes = note_hits.len(),
            "Unified search hits before merge"
        );

        let mut merged: Vec<ScopedResult> = entry_hits
            .into_iter()
            .map(|result| ScopedResult {
                scope: Scope::Entry,
                result,
            })
            .chain(note_hits.into_iter().map(|result| ScopedResult {
                scope: Scope::Note,
                result,
            }))
            .collect();

        merged.sort_by(|a, b| {
            b.result
                .relevance
                .cmp(&a.result.relevance)
                .then_with(|| {
                    let a_len = a.result.primary_text.chars().count();
                    let b_len = b.result.primary_text.chars().count();
                    a_len.cmp(&b_len)
                })
                .then_with(|| a.result.primary_text.cmp(&b.result.primary_text))
        });
        merged.truncate(self.limits.unified);
        Ok(merged)
    }

    /// Entries related to the given entry by keyword overlap.
    pub fn related_terms(&mut self, entry_id: i64) -> Result<Vec<SearchResult>, DomainError> {
        let entry = self.entries.get_entry(entry_id)?;
        let candidates = self.entry_candidates()?;
        Ok(ranking::related_terms(
            &entry.word_phrase,
            &candidates,
            Some(entry_id),
            self.limits.related,
        ))
    }

    fn entry_candidates(&mut self) -> Result<Vec<Candidate>, DomainError> {
        Ok(self
            .entries
            .list_entries()?
            .iter()
            .map(Candidate::from)
            .collect())
    }

    fn note_candidates(&mut self) -> Result<Vec<Candidate>, DomainError> {
        Ok(self
            .notes
            .list_notes()?
            .iter()
            .map(Candidate::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{entry_fixture, note_fixture, MockEntryRepository, MockNoteRepository};

    fn service_with_fixture() -> SearchService<MockEntryRepository, MockNoteRepository> {
        let entries = MockEntryRepository::builder()
            .with_entry(entry_fixture(1, "contract", "Agreement between parties"))
            .with_entry(entry_fixture(2, "contract law", "Study of contracts"))
            .with_entry(entry_fixture(3, "tort", "A civil wrong"))
            .build();
        let notes = MockNoteRepository::builder()
            .with_note(note_fixture(1, "Contract formation", "Offer and acceptance"))
            .with_note(note_fixture(2, "Damages", "Compensation for loss"))
            .build();
        SearchService::new(entries, notes)
    }

    #[test]
    fn given_exact_entry_match_when_searching_entries_then_it_ranks_first() {
        let mut service = service_with_fixture();

        let results = service.search_entries("contract").expect("Search should succeed");

        assert_eq!(results[0].primary_text, "contract");
        assert!(results.len() >= 2);
    }

    #[test]
    fn given_query_matching_both_stores_when_searching_all_then_results_carry_scope() {
        let mut service = service_with_fixture();

        let results = service.search_all("contract").expect("Search should succeed");

        assert!(results.iter().any(|r| r.scope == Scope::Entry));
        assert!(results.iter().any(|r| r.scope == Scope::Note));
        assert!(results.len() <= UNIFIED_SEARCH_LIMIT);
        // Exact entry match outranks the note title match.
        assert_eq!(results[0].result.primary_text, "contract");
    }

    #[test]
    fn given_entry_when_requesting_related_terms_then_source_is_excluded() {
        let mut service = service_with_fixture();

        let related = service.related_terms(1).expect("Related lookup should succeed");

        assert!(related.iter().all(|r| r.id != 1));
        assert!(related.iter().any(|r| r.primary_text == "contract law"));
    }

    #[test]
    fn given_empty_query_when_searching_then_returns_empty() {
        let mut service = service_with_fixture();
        assert!(service.search_entries("  ").expect("ok").is_empty());
        assert!(service.search_all("").expect("ok").is_empty());
    }
}
