// File: src/core/dictionary.rs
use crate::core::types::TopicEntry;
use crate::error::{AnswerError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SensesDocument {
    #[serde(rename = "Item", default)]
    items: Vec<SenseItem>,
}

#[derive(Debug, Deserialize)]
struct SenseItem {
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "@lemma")]
    lemma: Option<String>,
}

/// The ordered surface-name -> lemma table.
///
/// Order is significant: when several surface names occur in a query the
/// earliest entry wins, so this is deliberately a `Vec` and not a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDictionary {
    entries: Vec<TopicEntry>,
}

impl TopicDictionary {
    pub fn new(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TopicEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a senses document: every `<Item name=".." lemma=".."/>` under
    /// the root element, in document order. Items lacking either attribute
    /// are skipped.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let document: SensesDocument =
            quick_xml::de::from_str(xml).map_err(|e| AnswerError::Dictionary(e.to_string()))?;

        let mut entries = Vec::with_capacity(document.items.len());
        for (position, item) in document.items.into_iter().enumerate() {
            match (item.name, item.lemma) {
                (Some(name), Some(lemma)) => entries.push(TopicEntry { name, lemma }),
                (name, lemma) => {
                    tracing::warn!(position, ?name, ?lemma, "skipping incomplete dictionary item");
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        let dictionary = Self::from_xml(&xml)?;
        tracing::info!(path = %path.display(), entries = dictionary.len(), "loaded topic dictionary");
        Ok(dictionary)
    }
}

impl From<Vec<TopicEntry>> for TopicDictionary {
    fn from(entries: Vec<TopicEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a TopicDictionary {
    type Item = &'a TopicEntry;
    type IntoIter = std::slice::Iter<'a, TopicEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
