// src/domain/mod.rs
pub mod entry;
pub mod error;
pub mod note;
pub mod question;
pub mod search;

pub use entry::Entry;
pub use error::DomainError;
pub use note::Note;
pub use question::{Question, QuestionKind};
pub use search::{Candidate, Scope, SearchResult};
