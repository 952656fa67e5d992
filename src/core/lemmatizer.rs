// File: src/core/lemmatizer.rs
use crate::error::{AnswerError, DependencyFailure, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reduces a single lower-case word to its dictionary form.
///
/// Implementations are expected to always produce some form, falling back
/// to the word itself when it is unknown. An `Err` means the backing
/// analyzer itself is broken, not that the word was not found.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> Result<String, DependencyFailure>;
}

/// Returns every word unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseLemmatizer;

impl Lemmatizer for LowercaseLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<String, DependencyFailure> {
        Ok(word.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct LexiconLine {
    lemma: String,
    #[serde(default)]
    forms: Vec<String>,
}

/// A word-form table: maps every known inflected form to its lemma.
#[derive(Debug, Clone, Default)]
pub struct FormLemmatizer {
    /// Maps form -> lemma
    forms: HashMap<String, String>,
}

impl FormLemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `forms` (and the lemma itself) as reducing to `lemma`.
    /// A form registered twice keeps its latest lemma.
    pub fn add_forms<I, S>(&mut self, lemma: &str, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lemma = lemma.to_lowercase();
        self.forms.insert(lemma.clone(), lemma.clone());
        for form in forms {
            self.forms.insert(form.as_ref().to_lowercase(), lemma.clone());
        }
    }

    pub fn with_forms<I, S>(mut self, lemma: &str, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_forms(lemma, forms);
        self
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Parses a JSON-lines lexicon: one `{"lemma": .., "forms": [..]}` per line.
    pub fn from_jsonl<R: BufRead>(reader: R) -> Result<Self> {
        let mut lemmatizer = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let entry: LexiconLine =
                serde_json::from_str(line).map_err(|e| AnswerError::Lexicon {
                    line: idx + 1,
                    reason: e.to_string(),
                })?;
            lemmatizer.add_forms(&entry.lemma, &entry.forms);
        }
        Ok(lemmatizer)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let lemmatizer = Self::from_jsonl(BufReader::new(file))?;
        tracing::info!(path = %path.display(), forms = lemmatizer.len(), "loaded lexicon");
        Ok(lemmatizer)
    }
}

impl Lemmatizer for FormLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<String, DependencyFailure> {
        Ok(self.forms.get(word).cloned().unwrap_or_else(|| word.to_string()))
    }
}
