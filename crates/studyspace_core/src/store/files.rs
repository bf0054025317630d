//! File bookmarking operations.
//!
//! `recent_files` is kept most-recent-first: new entries are inserted at
//! the front rather than appended.

use crate::ids;
use crate::model::document::{FileCategory, StoredFile};
use crate::storage::StorageBackend;
use crate::store::{Store, StoreResult};

/// Input for a new file entry; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub name: String,
    /// Display icon kind, e.g. `"pdf"` or `"doc"`.
    pub kind: String,
    /// Human date label shown in listings.
    pub date: String,
    pub subject: Option<String>,
    pub category: Option<FileCategory>,
    pub size: String,
    pub data_url: Option<String>,
}

impl<S: StorageBackend> Store<S> {
    /// All files, most recent first.
    pub fn recent_files(&self) -> &[StoredFile] {
        &self.doc.recent_files
    }

    /// Files belonging to `subject_id`, optionally narrowed to one
    /// category. Order follows `recent_files`.
    pub fn subject_files(
        &self,
        subject_id: &str,
        category: Option<FileCategory>,
    ) -> Vec<&StoredFile> {
        self.doc
            .recent_files
            .iter()
            .filter(|file| file.subject.as_deref() == Some(subject_id))
            .filter(|file| category.is_none() || file.category == category)
            .collect()
    }

    pub fn file(&self, id: i64) -> Option<&StoredFile> {
        self.doc.recent_files.iter().find(|file| file.id == id)
    }

    /// Prepends a new file entry and returns its assigned id.
    pub fn add_file(&mut self, file: NewFile) -> StoreResult<i64> {
        let id = ids::next_id();
        self.doc.recent_files.insert(
            0,
            StoredFile {
                id,
                name: file.name,
                kind: file.kind,
                date: file.date,
                subject: file.subject,
                category: file.category,
                size: file.size,
                data_url: file.data_url,
                is_mock: false,
            },
        );
        self.persist()?;
        Ok(id)
    }

    pub fn delete_file(&mut self, id: i64) -> StoreResult<()> {
        let before = self.doc.recent_files.len();
        self.doc.recent_files.retain(|file| file.id != id);
        if self.doc.recent_files.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Renames the file with `id`. Unknown ids are a silent no-op and do
    /// not persist.
    pub fn rename_file(&mut self, id: i64, name: impl Into<String>) -> StoreResult<()> {
        let Some(file) = self.doc.recent_files.iter_mut().find(|f| f.id == id) else {
            return Ok(());
        };
        file.name = name.into();
        self.persist()
    }
}
