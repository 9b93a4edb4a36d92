// src/application/quiz.rs
//
// Quiz-question synthesis from glossary entries and notes. Pure
// transformation over pre-fetched records; all randomness comes from the
// injected rng so tests can seed it.
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::application::repository::{EntryRepository, NoteRepository};
use crate::constants::{
    BLANK_PLACEHOLDER, MCQ_DISTRACTORS, QUIZ_ENTRY_SAMPLE, QUIZ_MAX_QUESTIONS, QUIZ_NOTE_SAMPLE,
};
use crate::domain::{DomainError, Entry, Note, Question, QuestionKind};

/// Ask for the definition of a term. Always available for a well-formed
/// entry.
fn definition_question(word: &str, definition: &str) -> Question {
    Question {
        kind: QuestionKind::Definition,
        question: format!("What is the definition of '{word}'?"),
        answer: definition.to_string(),
        options: vec![],
    }
}

/// Blank out the term in its usage example. `None` if the entry has no
/// example.
fn fill_blank_question(word: &str, example: Option<&str>) -> Option<Question> {
    let example = example?.trim();
    if example.is_empty() {
        return None;
    }

    let blanked = example.replace(word, BLANK_PLACEHOLDER);
    Some(Question {
        kind: QuestionKind::FillBlank,
        question: format!("Complete the following sentence: {blanked}"),
        answer: word.to_string(),
        options: vec![],
    })
}

/// Multiple-choice question with three distractors sampled from the other
/// entries' definitions. `None` when fewer than three distinct distractors
/// exist in the batch.
fn multiple_choice_question<R: Rng>(
    word: &str,
    definition: &str,
    all_definitions: &[&str],
    rng: &mut R,
) -> Option<Question> {
    // Distinct pool, excluding the correct answer so it can never appear
    // twice among the options.
    let mut pool: Vec<&str> = Vec::new();
    for candidate in all_definitions {
        if *candidate != definition && !pool.contains(candidate) {
            pool.push(candidate);
        }
    }
    if pool.len() < MCQ_DISTRACTORS {
        return None;
    }

    let mut options: Vec<String> = pool
        .choose_multiple(rng, MCQ_DISTRACTORS)
        .map(|d| d.to_string())
        .collect();
    options.push(definition.to_string());
    options.shuffle(rng);

    Some(Question {
        kind: QuestionKind::MultipleChoice,
        question: format!("What is the correct definition of '{word}'?"),
        answer: definition.to_string(),
        options,
    })
}

/// Open-recall question over a note's content.
fn short_answer_question(title: &str, content: &str) -> Question {
    Question {
        kind: QuestionKind::ShortAnswer,
        question: format!("What are the key points about '{title}'?"),
        answer: content.to_string(),
        options: vec![],
    }
}

/// Synthesize a shuffled, deduplicated quiz from a batch of entries and
/// notes, capped at [`QUIZ_MAX_QUESTIONS`].
///
/// Malformed records (blank required fields) are skipped individually and
/// never abort the batch. Empty input yields an empty quiz.
pub fn synthesize<R: Rng>(entries: &[Entry], notes: &[Note], rng: &mut R) -> Vec<Question> {
    let well_formed: Vec<&Entry> = entries.iter().filter(|e| e.is_well_formed()).collect();
    let all_definitions: Vec<&str> = well_formed
        .iter()
        .map(|e| e.definition.as_str())
        .collect();

    let mut questions: Vec<Question> = Vec::new();
    for entry in &well_formed {
        questions.push(definition_question(&entry.word_phrase, &entry.definition));

        if let Some(q) = fill_blank_question(&entry.word_phrase, entry.example.as_deref()) {
            questions.push(q);
        }

        if let Some(q) = multiple_choice_question(
            &entry.word_phrase,
            &entry.definition,
            &all_definitions,
            rng,
        ) {
            questions.push(q);
        }
    }

    for note in notes.iter().filter(|n| n.is_well_formed()) {
        questions.push(short_answer_question(&note.title, &note.content));
    }

    // Drop duplicate question texts before shuffling so the cap is spent
    // on distinct questions.
    let mut seen: HashSet<String> = HashSet::new();
    questions.retain(|q| seen.insert(q.question.clone()));

    questions.shuffle(rng);
    questions.truncate(QUIZ_MAX_QUESTIONS);
    debug!(count = questions.len(), "Synthesized quiz questions");
    questions
}

/// Use case: generate a quiz for one course unit, sampling a manageable
/// number of entries and notes before synthesis.
pub struct QuizGenerator<E: EntryRepository, N: NoteRepository> {
    entries: E,
    notes: N,
}

impl<E: EntryRepository, N: NoteRepository> QuizGenerator<E, N> {
    pub fn new(entries: E, notes: N) -> Self {
        Self { entries, notes }
    }

    pub fn generate<R: Rng>(
        &mut self,
        unit_number: i64,
        rng: &mut R,
    ) -> Result<Vec<Question>, DomainError> {
        let entries = sample_cap(self.entries.entries_by_unit(unit_number)?, QUIZ_ENTRY_SAMPLE, rng);
        let notes = sample_cap(self.notes.notes_by_unit(unit_number)?, QUIZ_NOTE_SAMPLE, rng);
        debug!(
            unit_number,
            entries = entries.len(),
            notes = notes.len(),
            "Fetched quiz candidates"
        );
        Ok(synthesize(&entries, &notes, rng))
    }
}

/// Random sample of at most `cap` items, mirroring ORDER BY RANDOM() LIMIT.
fn sample_cap<T, R: Rng>(mut items: Vec<T>, cap: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(cap);
    items
}
