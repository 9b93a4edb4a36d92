// src/application/note_editor.rs
use crate::application::repository::NoteRepository;
use crate::domain::note::NoteDraft;
use crate::domain::DomainError;

pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn add_note(&mut self, mut draft: NoteDraft) -> Result<i64, DomainError> {
        draft.title = draft.title.trim().to_string();
        draft.content = draft.content.trim().to_string();
        if draft.title.is_empty() || draft.content.is_empty() {
            return Err(DomainError::MissingFields("Title and content"));
        }
        self.repository.add_note(draft)
    }

    pub fn set_favorite(&mut self, id: i64, is_favorite: bool) -> Result<(), DomainError> {
        self.repository.get_note(id)?;
        self.repository.set_favorite(id, is_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_blank_title_when_adding_note_then_returns_missing_fields_error() {
        let mock = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(mock);

        let result = editor.add_note(NoteDraft {
            title: "".to_string(),
            content: "some content".to_string(),
            ..Default::default()
        });

        assert!(matches!(result, Err(DomainError::MissingFields(_))));
    }

    #[test]
    fn given_valid_note_when_adding_then_returns_new_id() {
        let mock = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(mock);

        let id = editor
            .add_note(NoteDraft {
                title: "Negligence".to_string(),
                content: "Duty, breach, causation, damages.".to_string(),
                ..Default::default()
            })
            .expect("Add should succeed");

        assert!(id > 0);
    }

    #[test]
    fn given_nonexistent_note_when_favoriting_then_returns_not_found() {
        let mock = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(mock);

        let result = editor.set_favorite(42, true);
        assert!(matches!(result, Err(DomainError::NoteNotFound(42))));
    }
}
