// src/application/entry_viewer.rs
use crate::application::repository::EntryRepository;
use crate::domain::{DomainError, Entry};

pub struct EntryViewer<R: EntryRepository> {
    repository: R,
}

impl<R: EntryRepository> EntryViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch an entry for display, bumping its view counter first so the
    /// returned record carries the fresh count.
    pub fn view_entry(&mut self, id: i64) -> Result<Entry, DomainError> {
        self.repository.record_entry_view(id)?;
        self.repository.get_entry(id)
    }

    pub fn list_entries(&mut self) -> Result<Vec<Entry>, DomainError> {
        self.repository.list_entries()
    }
}
