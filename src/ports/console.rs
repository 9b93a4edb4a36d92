// src/ports/console.rs
use crate::application::search_service::ScopedResult;
use crate::domain::{Entry, Note, Question, QuestionKind, Scope, SearchResult};
use crate::util::text::highlight_matches;

/// ANSI reverse-video markers used to highlight query matches in search
/// output. Kept as a pair so stripping them reproduces the raw text.
const HIGHLIGHT_OPEN: &str = "\x1b[7m";
const HIGHLIGHT_CLOSE: &str = "\x1b[0m";

/// Plain-text presenter for terminal output.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_entry(&self, entry: &Entry, related: &[SearchResult]) -> String {
        let mut out = format!(
            "{}\n{}\n\n{}\n",
            entry.word_phrase,
            "=".repeat(entry.word_phrase.chars().count()),
            entry.definition
        );
        if let Some(example) = &entry.example {
            out.push_str(&format!("\nExample: {example}\n"));
        }
        if let Some(unit) = entry.unit_number {
            out.push_str(&format!("Unit: {unit}\n"));
        }
        out.push_str(&format!(
            "Views: {} | Created: {} | Updated: {}\n",
            entry.views, entry.created_at, entry.last_updated
        ));
        if !related.is_empty() {
            out.push_str("\nRelated terms:\n");
            for r in related {
                out.push_str(&format!("  [{}] {}\n", r.id, r.primary_text));
            }
        }
        out
    }

    pub fn render_entry_list(&self, entries: &[Entry]) -> String {
        let mut out = String::new();
        for entry in entries {
            out.push_str(&format!(
                "[{}] {} - {}\n",
                entry.id,
                entry.word_phrase,
                first_line(&entry.definition)
            ));
        }
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = format!(
            "{}\n{}\n\n{}\n",
            note.title,
            "=".repeat(note.title.chars().count()),
            note.content
        );
        if let Some(tags) = &note.tags {
            out.push_str(&format!("\nTags: {tags}\n"));
        }
        if let Some(comments) = &note.comments {
            out.push_str(&format!("Comments: {comments}\n"));
        }
        let related = note.related_entry_ids();
        if !related.is_empty() {
            let ids: Vec<String> = related.iter().map(|id| id.to_string()).collect();
            out.push_str(&format!("Related entries: {}\n", ids.join(", ")));
        }
        out.push_str(&format!(
            "Views: {}{} | Updated: {}\n",
            note.views,
            if note.is_favorite { " | ★" } else { "" },
            note.last_updated
        ));
        out
    }

    pub fn render_note_list(&self, notes: &[Note]) -> String {
        let mut out = String::new();
        for note in notes {
            out.push_str(&format!(
                "[{}]{} {} (unit {}) - updated {}\n",
                note.id,
                if note.is_favorite { " ★" } else { "" },
                note.title,
                note.unit_number
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                note.last_updated
            ));
        }
        out
    }

    /// Render ranked search results, highlighting query matches in both
    /// text fields.
    pub fn render_search_results(&self, results: &[SearchResult], query: &str) -> String {
        if results.is_empty() {
            return format!("No matches for '{query}'\n");
        }
        let mut out = String::new();
        for r in results {
            out.push_str(&format!(
                "[{}] {} (score {})\n    {}\n",
                r.id,
                highlight_matches(&r.primary_text, query, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
                r.relevance,
                first_line(&highlight_matches(
                    &r.secondary_text,
                    query,
                    HIGHLIGHT_OPEN,
                    HIGHLIGHT_CLOSE
                ))
            ));
        }
        out
    }

    pub fn render_unified_results(&self, results: &[ScopedResult], query: &str) -> String {
        if results.is_empty() {
            return format!("No matches for '{query}'\n");
        }
        let mut out = String::new();
        for r in results {
            let scope = match r.scope {
                Scope::Entry => "entry",
                Scope::Note => "note",
            };
            out.push_str(&format!(
                "[{scope} {}] {} (score {})\n",
                r.result.id,
                highlight_matches(&r.result.primary_text, query, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
                r.result.relevance
            ));
        }
        out
    }

    pub fn render_quiz(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return "No questions could be generated for this unit.\n".to_string();
        }
        let mut out = String::new();
        for (i, q) in questions.iter().enumerate() {
            out.push_str(&format!("{}. [{}] {}\n", i + 1, kind_label(q.kind), q.question));
            for (j, option) in q.options.iter().enumerate() {
                // a), b), c), d)
                let letter = (b'a' + j as u8) as char;
                out.push_str(&format!("     {letter}) {option}\n"));
            }
        }
        out
    }

    /// Quiz rendering including answers, for self-checking.
    pub fn render_quiz_with_answers(&self, questions: &[Question]) -> String {
        let mut out = self.render_quiz(questions);
        if !questions.is_empty() {
            out.push_str("\nAnswers:\n");
            for (i, q) in questions.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, first_line(&q.answer)));
            }
        }
        out
    }
}

fn kind_label(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Definition => "definition",
        QuestionKind::FillBlank => "fill in the blank",
        QuestionKind::MultipleChoice => "multiple choice",
        QuestionKind::ShortAnswer => "short answer",
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
