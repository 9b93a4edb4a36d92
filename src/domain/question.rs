// src/domain/question.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Definition,
    FillBlank,
    MultipleChoice,
    ShortAnswer,
}

/// A generated quiz question. Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    pub answer: String,
    /// Empty unless `kind` is `MultipleChoice`, where it holds the
    /// shuffled four-option list including the answer.
    pub options: Vec<String>,
}
