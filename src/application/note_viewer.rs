// src/application/note_viewer.rs
use crate::application::repository::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch a note for display, bumping its view counter first.
    pub fn view_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.repository.record_note_view(id)?;
        self.repository.get_note(id)
    }

    pub fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.repository.list_notes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{note_fixture, MockNoteRepository};

    #[test]
    fn given_existing_note_when_viewing_then_view_count_increments() {
        let mock = MockNoteRepository::builder()
            .with_note(note_fixture(1, "Negligence", "Duty, breach, causation."))
            .build();
        let mut viewer = NoteViewer::new(mock);

        let note = viewer.view_note(1).expect("Note should exist");
        assert_eq!(note.views, 1);
    }

    #[test]
    fn given_nonexistent_note_when_viewing_then_returns_error() {
        let mock = MockNoteRepository::builder().build();
        let mut viewer = NoteViewer::new(mock);

        let result = viewer.view_note(7);
        assert!(matches!(result, Err(DomainError::NoteNotFound(7))));
    }
}
