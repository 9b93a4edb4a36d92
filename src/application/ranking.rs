// src/application/ranking.rs
//
// Ranked keyword search over already-fetched records. Scoring is an
// additive signal-bit model: each signal that fires adds its weight, and
// a record qualifies as soon as any signal fires.
use std::cmp::Ordering;

use tracing::debug;

use crate::constants::{MIN_KEYWORD_LEN, RELATED_KEYWORD_COUNT};
use crate::domain::{Candidate, SearchResult};
use crate::util::text::extract_keywords;

/// Weight added when `primary_text` equals the full query (case-insensitive).
const WEIGHT_EXACT: u32 = 4;
/// Weight added when `primary_text` starts with the full query.
const WEIGHT_PREFIX: u32 = 3;
/// Weight added when every keyword appears in primary or secondary text.
const WEIGHT_ALL_KEYWORDS: u32 = 2;
/// Weight added when at least one keyword appears.
const WEIGHT_ANY_KEYWORD: u32 = 1;

/// Rank `candidates` against `query`, returning at most `limit` results
/// ordered by relevance descending, then primary-text length ascending
/// (shorter, more specific matches first), then primary text ascending.
///
/// An empty or whitespace-only query yields an empty result set.
pub fn rank(query: &str, candidates: &[Candidate], limit: usize) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return vec![];
    }

    let query_lower = trimmed.to_lowercase();
    let keywords = extract_keywords(trimmed);
    debug!(query = trimmed, ?keywords, "Ranking candidates");

    let mut results: Vec<SearchResult> = candidates
        .iter()
        .filter_map(|candidate| {
            let relevance = score(&query_lower, &keywords, candidate);
            (relevance > 0).then(|| SearchResult {
                id: candidate.id,
                primary_text: candidate.primary_text.clone(),
                secondary_text: candidate.secondary_text.clone(),
                relevance,
            })
        })
        .collect();

    results.sort_by(compare_results);
    results.truncate(limit);
    results
}

/// Additive signal-bit relevance score. Zero means no signal fired and
/// the record is excluded.
fn score(query_lower: &str, keywords: &[String], candidate: &Candidate) -> u32 {
    let primary = candidate.primary_text.to_lowercase();
    let secondary = candidate.secondary_text.to_lowercase();

    let mut relevance = 0;
    if primary == query_lower {
        relevance += WEIGHT_EXACT;
    }
    if primary.starts_with(query_lower) {
        relevance += WEIGHT_PREFIX;
    }

    let hits = keywords
        .iter()
        .filter(|kw| primary.contains(kw.as_str()) || secondary.contains(kw.as_str()))
        .count();
    if !keywords.is_empty() && hits == keywords.len() {
        relevance += WEIGHT_ALL_KEYWORDS;
    }
    if hits > 0 {
        relevance += WEIGHT_ANY_KEYWORD;
    }

    relevance
}

fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.relevance
        .cmp(&a.relevance)
        .then_with(|| primary_len(a).cmp(&primary_len(b)))
        .then_with(|| a.primary_text.cmp(&b.primary_text))
}

// Character count, not byte length, so non-ASCII terms sort the same as
// ASCII ones of equal visible length.
fn primary_len(result: &SearchResult) -> usize {
    result.primary_text.chars().count()
}

/// Find up to `limit` records related to a source record's primary text,
/// excluding `current_id`.
///
/// A candidate qualifies if its primary or secondary text contains any of
/// the first three keywords (length > 2) of `source_text`. Relevance is
/// the count of other records whose primary text contains the candidate's
/// primary text or vice versa, not the weighted query score.
pub fn related_terms(
    source_text: &str,
    candidates: &[Candidate],
    current_id: Option<i64>,
    limit: usize,
) -> Vec<SearchResult> {
    if source_text.trim().is_empty() {
        return vec![];
    }

    let word_re = regex::Regex::new(r"\w+").unwrap();
    let keywords: Vec<String> = word_re
        .find_iter(&source_text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN)
        .take(RELATED_KEYWORD_COUNT)
        .collect();
    if keywords.is_empty() {
        return vec![];
    }

    let mut results: Vec<SearchResult> = candidates
        .iter()
        .filter(|candidate| current_id != Some(candidate.id))
        .filter(|candidate| {
            let primary = candidate.primary_text.to_lowercase();
            let secondary = candidate.secondary_text.to_lowercase();
            keywords
                .iter()
                .any(|kw| primary.contains(kw.as_str()) || secondary.contains(kw.as_str()))
        })
        .map(|candidate| SearchResult {
            id: candidate.id,
            primary_text: candidate.primary_text.clone(),
            secondary_text: candidate.secondary_text.clone(),
            relevance: overlap_count(candidate, candidates),
        })
        .collect();

    results.sort_by(|a, b| {
        b.relevance
            .cmp(&a.relevance)
            .then_with(|| primary_len(a).cmp(&primary_len(b)))
    });
    results.truncate(limit);
    results
}

/// Count of other records whose primary text textually overlaps with this
/// record's primary text (containment in either direction).
fn overlap_count(candidate: &Candidate, all: &[Candidate]) -> u32 {
    let primary = candidate.primary_text.to_lowercase();
    all.iter()
        .filter(|other| other.id != candidate.id)
        .filter(|other| {
            let other_primary = other.primary_text.to_lowercase();
            other_primary.contains(&primary) || primary.contains(&other_primary)
        })
        .count() as u32
}
