// src/application/mod.rs
pub mod entry_editor;
pub mod entry_viewer;
pub mod note_editor;
pub mod note_viewer;
pub mod quiz;
pub mod ranking;
pub mod repository;
pub mod search_service;

pub use entry_editor::EntryEditor;
pub use entry_viewer::EntryViewer;
pub use note_editor::NoteEditor;
pub use note_viewer::NoteViewer;
pub use quiz::QuizGenerator;
pub use repository::{EntryRepository, NoteRepository};
pub use search_service::{ScopedResult, SearchLimits, SearchService};
