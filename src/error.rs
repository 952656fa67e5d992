// File: src/error.rs
use thiserror::Error;

/// A fault raised by one of the collaborators the pipeline depends on.
///
/// These are kept apart from the ordinary miss outcomes (`NoTopic`,
/// `NoAnswer`) so that an unreachable store is never reported as
/// "no answer".
#[derive(Debug, Error, PartialEq)]
pub enum DependencyFailure {
    #[error("lemmatizer failed on '{word}': {reason}")]
    Lemmatizer { word: String, reason: String },

    #[error("answer store failed: {0}")]
    Store(String),
}

/// The common error type used by this crate
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error(transparent)]
    Dependency(#[from] DependencyFailure),

    /// The topic dictionary source could not be parsed
    #[error("malformed topic dictionary: {0}")]
    Dictionary(String),

    /// A lexicon line could not be parsed
    #[error("malformed lexicon at line {line}: {reason}")]
    Lexicon { line: usize, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnswerError {
    pub fn is_dependency_failure(&self) -> bool {
        matches!(self, AnswerError::Dependency(_))
    }
}

impl From<rusqlite::Error> for DependencyFailure {
    fn from(value: rusqlite::Error) -> Self {
        DependencyFailure::Store(format!("{value}"))
    }
}

impl From<bincode::Error> for DependencyFailure {
    fn from(value: bincode::Error) -> Self {
        DependencyFailure::Store(format!("{value}"))
    }
}

pub type Result<T, E = AnswerError> = std::result::Result<T, E>;
