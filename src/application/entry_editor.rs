// src/application/entry_editor.rs
use crate::application::repository::EntryRepository;
use crate::domain::entry::EntryDraft;
use crate::domain::DomainError;

pub struct EntryEditor<R: EntryRepository> {
    repository: R,
}

impl<R: EntryRepository> EntryEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Add a new entry after validating required fields.
    pub fn add_entry(&mut self, mut draft: EntryDraft) -> Result<i64, DomainError> {
        normalize(&mut draft);
        if draft.word_phrase.is_empty() || draft.definition.is_empty() {
            return Err(DomainError::MissingFields("Word/phrase and definition"));
        }
        self.repository.add_entry(draft)
    }

    /// Overwrite an existing entry's editable fields.
    pub fn edit_entry(&mut self, id: i64, mut draft: EntryDraft) -> Result<(), DomainError> {
        normalize(&mut draft);
        if draft.word_phrase.is_empty() || draft.definition.is_empty() {
            return Err(DomainError::MissingFields("Word/phrase and definition"));
        }
        // Surface a not-found error before attempting the update.
        self.repository.get_entry(id)?;
        self.repository.update_entry(id, draft)
    }
}

fn normalize(draft: &mut EntryDraft) {
    draft.word_phrase = draft.word_phrase.trim().to_string();
    draft.definition = draft.definition.trim().to_string();
    draft.example = draft
        .example
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);
}
