use crate::core::dictionary::TopicDictionary;
use crate::core::normalizer::Normalizer;
use crate::core::resolver::{SubstringResolver, TopicResolver};
use crate::core::types::{MatchMode, Resolution};
use crate::error::{DependencyFailure, Result};
use crate::store::AnswerStore;

// The pipeline owns its dictionary and store handle. Nothing here is
// global, so two pipelines over different stores can coexist.
pub struct QueryPipeline<S> {
    dictionary: TopicDictionary,
    store: S,
    normalizer: Normalizer,
    resolver: Box<dyn TopicResolver>,
    match_mode: MatchMode,
}

impl<S: AnswerStore> QueryPipeline<S> {
    /// Substring matching against the raw query.
    pub fn new(dictionary: TopicDictionary, store: S, normalizer: Normalizer) -> Self {
        Self {
            dictionary,
            store,
            normalizer,
            resolver: Box::new(SubstringResolver),
            match_mode: MatchMode::Raw,
        }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn TopicResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn normalize(&self, raw: &str) -> Result<String> {
        Ok(self.normalizer.normalize(raw)?)
    }

    /// Finds the topic lemma for `raw`, matching against the raw text or its
    /// normalized form depending on the match mode.
    pub fn resolve_topic(&self, raw: &str) -> Result<Option<String>> {
        let topic = match self.match_mode {
            MatchMode::Raw => self.resolver.resolve(raw, &self.dictionary),
            MatchMode::Normalized => {
                let normalized = self.normalizer.normalize(raw)?;
                tracing::debug!(%normalized, "normalized query");
                self.resolver.resolve(&normalized, &self.dictionary)
            }
        };
        Ok(topic.map(str::to_string))
    }

    /// Exact lookup of `key` in the store.
    pub fn lookup_answer(&self, key: &str) -> Result<Option<String>, DependencyFailure> {
        self.store.get(key)
    }

    /// Answers one query.
    ///
    /// 1. Resolve the topic.
    /// 2. With no topic, fall through with the empty key.
    /// 3. Exact store lookup with that key.
    pub fn answer_query(&self, raw: &str) -> Result<Resolution> {
        let topic = self.resolve_topic(raw)?;
        let key = topic.as_deref().unwrap_or("");
        tracing::debug!(query = raw, topic = ?topic, "resolved topic");

        let resolution = match (self.lookup_answer(key)?, topic) {
            (Some(answer), _) => Resolution::Answer(answer),
            (None, Some(topic)) => Resolution::NoAnswer { topic },
            (None, None) => Resolution::NoTopic,
        };
        tracing::debug!(query = raw, answered = resolution.is_answer(), "answered query");
        Ok(resolution)
    }
}
