// File: src/store/file.rs
use crate::error::DependencyFailure;
use crate::store::AnswerStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The serializable state of the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Snapshot {
    answers: HashMap<String, String>,
}

/// Answers kept in memory and persisted as a bincode snapshot.
///
/// Writes only reach disk on `flush`, which replaces the file atomically.
#[derive(Debug)]
pub struct FileAnswerStore {
    path: PathBuf,
    snapshot: Snapshot,
    dirty: bool,
}

impl FileAnswerStore {
    /// Opens the snapshot at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DependencyFailure> {
        let path = path.into();
        let snapshot = match File::open(&path) {
            Ok(file) => bincode::deserialize_from(BufReader::new(file))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Snapshot::default(),
            Err(e) => return Err(DependencyFailure::Store(e.to_string())),
        };
        tracing::debug!(path = %path.display(), answers = snapshot.answers.len(), "opened answer snapshot");
        Ok(Self { path, snapshot, dirty: false })
    }

    pub fn len(&self) -> usize {
        self.snapshot.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.answers.is_empty()
    }

    /// Writes the snapshot next to its destination and renames it into place.
    pub fn flush(&mut self) -> Result<(), DependencyFailure> {
        if !self.dirty {
            return Ok(());
        }
        let io = |e: std::io::Error| DependencyFailure::Store(e.to_string());

        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(io)?;

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(io)?;
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &self.snapshot)?;
        writer.flush().map_err(io)?;
        drop(writer);
        temp_file.persist(&self.path).map_err(|e| io(e.error))?;

        self.dirty = false;
        tracing::debug!(path = %self.path.display(), "flushed answer snapshot");
        Ok(())
    }
}

impl AnswerStore for FileAnswerStore {
    fn get(&self, key: &str) -> Result<Option<String>, DependencyFailure> {
        Ok(self.snapshot.answers.get(key).cloned())
    }

    fn put(&mut self, phrase: &str, answer: &str) -> Result<(), DependencyFailure> {
        self.snapshot.answers.insert(phrase.to_string(), answer.to_string());
        self.dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAnswerStore::open(dir.path().join("answers.bin")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("кофе").unwrap(), None);
    }

    #[test]
    fn answers_survive_flush_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("answers.bin");

        let mut store = FileAnswerStore::open(&path).unwrap();
        store.put("суши", "Суши - японское блюдо").unwrap();
        store.flush().unwrap();

        let reopened = FileAnswerStore::open(&path).unwrap();
        assert_eq!(reopened.get("суши").unwrap().as_deref(), Some("Суши - японское блюдо"));
    }

    #[test]
    fn unflushed_writes_are_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.bin");

        let mut store = FileAnswerStore::open(&path).unwrap();
        store.put("хлеб", "Домашний хлеб можно приготовить").unwrap();
        drop(store);

        assert!(!path.exists());
    }

    #[test]
    fn corrupt_snapshot_is_a_store_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.bin");
        fs::write(&path, [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]).unwrap();

        assert!(matches!(FileAnswerStore::open(&path), Err(DependencyFailure::Store(_))));
    }
}
