// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown to the user when a query resolves to nothing.
pub const NO_ANSWER_MESSAGE: &str = "No answer available";

/// One (surface name, topic lemma) pair of the topic dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    /// Phrase as it may literally appear inside a query, e.g. "паста карбонара".
    pub name: String,
    /// Canonical key used to look up the answer.
    pub lemma: String,
}

impl TopicEntry {
    pub fn new(name: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self { name: name.into(), lemma: lemma.into() }
    }
}

/// A stored answer. `phrase` is matched exactly against the resolved topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub phrase: String,
    pub answer: String,
}

impl AnswerRecord {
    pub fn new(phrase: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { phrase: phrase.into(), answer: answer.into() }
    }
}

/// Outcome of answering one query. Both misses are ordinary values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answer(String),
    /// No dictionary entry matched and nothing is stored under the empty key.
    NoTopic,
    /// A topic was recognized but the store holds no answer for it.
    NoAnswer { topic: String },
}

impl Resolution {
    pub fn is_answer(&self) -> bool {
        matches!(self, Resolution::Answer(_))
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Resolution::Answer(text) => Some(text),
            _ => None,
        }
    }

    /// The text shown to the user. Misses render as `no_answer_message`.
    pub fn render<'a>(&'a self, no_answer_message: &'a str) -> &'a str {
        self.answer().unwrap_or(no_answer_message)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(NO_ANSWER_MESSAGE))
    }
}

/// Which form of the query surface names are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Match against the query exactly as typed.
    #[default]
    Raw,
    /// Normalize the query first, so inflected forms can match.
    Normalized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misses_render_the_fixed_message() {
        assert_eq!(Resolution::NoTopic.to_string(), NO_ANSWER_MESSAGE);
        let miss = Resolution::NoAnswer { topic: "суши".into() };
        assert_eq!(miss.render("Ответ не получен"), "Ответ не получен");
        assert!(!miss.is_answer());
    }

    #[test]
    fn empty_answer_is_still_an_answer() {
        let hit = Resolution::Answer(String::new());
        assert!(hit.is_answer());
        assert_eq!(hit.render(NO_ANSWER_MESSAGE), "");
    }

    #[test]
    fn match_mode_reads_lowercase_names() {
        let mode: MatchMode = serde_json::from_str("\"normalized\"").unwrap();
        assert_eq!(mode, MatchMode::Normalized);
        assert_eq!(MatchMode::default(), MatchMode::Raw);
    }
}
