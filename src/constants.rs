// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Maximum number of results returned by a primary (single-store) search.
///
/// Used in: `application/search_service.rs`
pub const SEARCH_LIMIT: usize = 50;

/// Maximum number of results returned by a unified search across both stores.
///
/// Used in: `application/search_service.rs`
pub const UNIFIED_SEARCH_LIMIT: usize = 10;

/// Maximum number of related terms shown next to a viewed entry.
///
/// Used in: `application/search_service.rs`
pub const RELATED_TERMS_LIMIT: usize = 5;

/// Keywords of at most this many characters are treated as stop-word
/// noise and dropped during query tokenization.
///
/// Used in: `util/text.rs`, `application/ranking.rs`
pub const MIN_KEYWORD_LEN: usize = 2;

/// Number of source keywords considered when looking up related terms.
///
/// Used in: `application/ranking.rs`
pub const RELATED_KEYWORD_COUNT: usize = 3;

/// Hard cap on the number of questions in a generated quiz.
///
/// Used in: `application/quiz.rs`
pub const QUIZ_MAX_QUESTIONS: usize = 15;

/// Entries sampled per unit when generating a quiz, to keep it manageable.
///
/// Used in: `application/quiz.rs`
pub const QUIZ_ENTRY_SAMPLE: usize = 20;

/// Notes sampled per unit when generating a quiz, to keep it focused.
///
/// Used in: `application/quiz.rs`
pub const QUIZ_NOTE_SAMPLE: usize = 5;

/// Number of incorrect options accompanying the answer in a
/// multiple-choice question.
///
/// Used in: `application/quiz.rs`
pub const MCQ_DISTRACTORS: usize = 3;

/// Placeholder substituted for the term in fill-in-the-blank questions.
///
/// Used in: `application/quiz.rs`
pub const BLANK_PLACEHOLDER: &str = "__________";
