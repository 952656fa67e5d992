pub mod dictionary;
pub mod lemmatizer;
pub mod normalizer;
pub mod pipeline;
pub mod resolver;
pub mod types;
