// File: src/config.rs
use crate::core::resolver::Matcher;
use crate::core::types::{MatchMode, NO_ANSWER_MESSAGE};
use crate::error::{AnswerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_SENSES_PATH: &str = "xml/senses.xml";
const DEFAULT_DATABASE_PATH: &str = "db/database.db";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub senses_path: PathBuf,
    pub database_path: PathBuf,
    /// JSON-lines word-form table. Without it words are only lower-cased.
    pub lexicon_path: Option<PathBuf>,
    pub match_mode: MatchMode,
    pub matcher: Matcher,
    pub no_answer_message: String,
    /// Extra service words on top of those stored in the database.
    pub service_words: Vec<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            senses_path: PathBuf::from(DEFAULT_SENSES_PATH),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            lexicon_path: None,
            match_mode: MatchMode::default(),
            matcher: Matcher::default(),
            no_answer_message: NO_ANSWER_MESSAGE.to_string(),
            service_words: Vec::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnswerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// An empty miss message would be indistinguishable from an empty answer.
    pub fn validate(&self) -> Result<()> {
        if self.no_answer_message.trim().is_empty() {
            return Err(AnswerError::Config("no_answer_message must not be empty".into()));
        }
        Ok(())
    }
}
