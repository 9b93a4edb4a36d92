// src/util/text.rs
use regex::{Regex, RegexBuilder};

use crate::constants::MIN_KEYWORD_LEN;

/// Split a query into lower-cased keywords at word boundaries, dropping
/// short stop-word-like tokens.
///
/// Tokens of length <= 2 are discarded. If nothing survives (e.g. the
/// query is only short words), the whole trimmed query is returned as the
/// sole keyword so that a short query like "xy" still matches literally.
///
/// # Examples
///
/// ```
/// use studydeck::util::text::extract_keywords;
///
/// assert_eq!(extract_keywords("Contract law basics"), vec!["contract", "law", "basics"]);
/// assert_eq!(extract_keywords("xy"), vec!["xy"]);
/// ```
pub fn extract_keywords(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return vec![];
    }

    let word_re = Regex::new(r"\w+").unwrap();
    let keywords: Vec<String> = word_re
        .find_iter(&trimmed.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN)
        .collect();

    if keywords.is_empty() {
        // Fall back to the raw query so single short tokens still match.
        vec![trimmed.to_lowercase()]
    } else {
        keywords
    }
}

/// Wrap every case-insensitive occurrence of `query` in `text` with the
/// given markers, preserving the matched text's original case.
///
/// The query is escaped, so characters special to regex syntax are
/// matched literally. Stripping the markers reproduces `text` exactly.
///
/// # Examples
///
/// ```
/// use studydeck::util::text::highlight_matches;
///
/// let out = highlight_matches("A Tort is a civil wrong.", "tort", "<mark>", "</mark>");
/// assert_eq!(out, "A <mark>Tort</mark> is a civil wrong.");
/// ```
pub fn highlight_matches(text: &str, query: &str, open: &str, close: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }

    let pattern = RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
        .unwrap();

    pattern
        .replace_all(text, |caps: &regex::Captures| {
            format!("{open}{}{close}", &caps[0])
        })
        .into_owned()
}
