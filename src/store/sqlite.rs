// File: src/store/sqlite.rs
use crate::error::DependencyFailure;
use crate::store::AnswerStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Answers held in a SQLite database.
///
/// Owns its connection; hand the store to the pipeline instead of sharing
/// a global handle.
pub struct SqliteAnswerStore {
    conn: Connection,
}

impl SqliteAnswerStore {
    pub fn open(path: &Path) -> Result<Self, DependencyFailure> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DependencyFailure::Store(e.to_string()))?;
            }
        }
        let store = Self { conn: Connection::open(path)? };
        store.create_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, DependencyFailure> {
        let store = Self { conn: Connection::open_in_memory()? };
        store.create_schema()?;
        Ok(store)
    }

    pub fn create_schema(&self) -> Result<(), DependencyFailure> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS "requests"(
                "id" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                "phrase" TEXT NOT NULL UNIQUE,
                "answer" TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS "service-words"(
                "id" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                "word" TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Drops both tables and recreates them empty.
    pub fn reset(&self) -> Result<(), DependencyFailure> {
        self.conn.execute_batch(
            r#"
            DROP TABLE IF EXISTS "requests";
            DROP TABLE IF EXISTS "service-words";
            "#,
        )?;
        tracing::info!("cleared answer database");
        self.create_schema()
    }

    pub fn add_service_word(&self, word: &str) -> Result<(), DependencyFailure> {
        self.conn
            .execute(r#"INSERT INTO "service-words"("word") VALUES(?1)"#, params![word])?;
        Ok(())
    }

    /// Service words in insertion order.
    pub fn service_words(&self) -> Result<Vec<String>, DependencyFailure> {
        let mut stmt = self
            .conn
            .prepare(r#"SELECT "word" FROM "service-words" ORDER BY "id""#)?;
        let words = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(words)
    }

    pub fn len(&self) -> Result<usize, DependencyFailure> {
        let count: i64 = self
            .conn
            .query_row(r#"SELECT COUNT(*) FROM "requests""#, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl AnswerStore for SqliteAnswerStore {
    fn get(&self, key: &str) -> Result<Option<String>, DependencyFailure> {
        let answer = self
            .conn
            .query_row(
                r#"SELECT "answer" FROM "requests" WHERE "phrase" = ?1"#,
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(answer)
    }

    fn put(&mut self, phrase: &str, answer: &str) -> Result<(), DependencyFailure> {
        self.conn.execute(
            r#"INSERT OR REPLACE INTO "requests"("phrase", "answer") VALUES(?1, ?2)"#,
            params![phrase, answer],
        )?;
        Ok(())
    }
}

impl std::fmt::Debug for SqliteAnswerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteAnswerStore")
            .field("path", &self.conn.path())
            .finish()
    }
}
