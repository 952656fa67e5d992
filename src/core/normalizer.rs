// File: src/core/normalizer.rs
use crate::core::lemmatizer::Lemmatizer;
use crate::error::DependencyFailure;
use std::collections::HashSet;
use std::sync::Arc;

/// Turns a raw query into space-joined lemmas with punctuation stripped.
#[derive(Clone)]
pub struct Normalizer {
    lemmatizer: Arc<dyn Lemmatizer>,
    /// Lemmas dropped from the output, e.g. "в", "на", "и".
    service_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(lemmatizer: impl Lemmatizer + 'static) -> Self {
        Self { lemmatizer: Arc::new(lemmatizer), service_words: HashSet::new() }
    }

    pub fn with_service_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Normalizes `raw`. Empty and all-punctuation input give `""`.
    /// O(n) in the input length plus one lemmatizer call per token.
    pub fn normalize(&self, raw: &str) -> Result<String, DependencyFailure> {
        let stripped: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        let mut lemmas = Vec::new();
        for token in stripped.split_whitespace() {
            let lemma = self.lemmatizer.lemmatize(&token.to_lowercase())?;
            if self.service_words.contains(&lemma) {
                continue;
            }
            lemmas.push(lemma);
        }
        Ok(lemmas.join(" "))
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("service_words", &self.service_words)
            .finish_non_exhaustive()
    }
}
