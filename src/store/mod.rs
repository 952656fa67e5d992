// src/store/mod.rs
use crate::core::types::AnswerRecord;
use crate::error::DependencyFailure;
use std::collections::HashMap;

pub mod file;
pub mod sqlite;

pub use file::FileAnswerStore;
pub use sqlite::SqliteAnswerStore;

/// Key/value access to the stored answers.
///
/// `get` misses are `Ok(None)`; `Err` is reserved for the store itself
/// being unusable.
pub trait AnswerStore {
    fn get(&self, key: &str) -> Result<Option<String>, DependencyFailure>;

    /// Inserts or replaces the answer stored under `phrase`.
    fn put(&mut self, phrase: &str, answer: &str) -> Result<(), DependencyFailure>;
}

/// Writes every record into `store`. Later records overwrite earlier ones
/// with the same phrase.
pub fn provision<S: AnswerStore + ?Sized>(
    store: &mut S,
    records: &[AnswerRecord],
) -> Result<(), DependencyFailure> {
    for record in records {
        store.put(&record.phrase, &record.answer)?;
    }
    tracing::info!(records = records.len(), "provisioned answer store");
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAnswerStore {
    answers: HashMap<String, String>,
}

impl MemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<AnswerRecord> for MemoryAnswerStore {
    fn from_iter<I: IntoIterator<Item = AnswerRecord>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|r| (r.phrase, r.answer)).collect(),
        }
    }
}

impl AnswerStore for MemoryAnswerStore {
    fn get(&self, key: &str) -> Result<Option<String>, DependencyFailure> {
        Ok(self.answers.get(key).cloned())
    }

    fn put(&mut self, phrase: &str, answer: &str) -> Result<(), DependencyFailure> {
        self.answers.insert(phrase.to_string(), answer.to_string());
        Ok(())
    }
}
