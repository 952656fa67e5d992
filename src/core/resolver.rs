// File: src/core/resolver.rs
use crate::core::dictionary::TopicDictionary;
use serde::{Deserialize, Serialize};

/// Maps a query to the lemma of the first dictionary entry it mentions.
///
/// `None` is the "no topic" outcome. Implementations must walk the
/// dictionary in order and stop at the first match.
pub trait TopicResolver: Send + Sync {
    fn resolve<'d>(&self, query: &str, dictionary: &'d TopicDictionary) -> Option<&'d str>;
}

/// Literal, case-sensitive substring containment.
///
/// A short surface name can fire inside a longer word ("в" matches
/// "вкусный").
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringResolver;

impl TopicResolver for SubstringResolver {
    fn resolve<'d>(&self, query: &str, dictionary: &'d TopicDictionary) -> Option<&'d str> {
        dictionary
            .iter()
            .find(|entry| query.contains(entry.name.as_str()))
            .map(|entry| entry.lemma.as_str())
    }
}

/// Matches a surface name only as a run of whole whitespace-separated tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenResolver;

impl TokenResolver {
    fn contains_tokens(haystack: &[&str], needle: &[&str]) -> bool {
        !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
    }
}

impl TopicResolver for TokenResolver {
    fn resolve<'d>(&self, query: &str, dictionary: &'d TopicDictionary) -> Option<&'d str> {
        let tokens: Vec<&str> = query.split_whitespace().collect();
        dictionary
            .iter()
            .find(|entry| {
                let name: Vec<&str> = entry.name.split_whitespace().collect();
                Self::contains_tokens(&tokens, &name)
            })
            .map(|entry| entry.lemma.as_str())
    }
}

/// Config-level selector for the resolver implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Matcher {
    #[default]
    Substring,
    Token,
}

impl Matcher {
    pub fn build(self) -> Box<dyn TopicResolver> {
        match self {
            Matcher::Substring => Box::new(SubstringResolver),
            Matcher::Token => Box::new(TokenResolver),
        }
    }
}
