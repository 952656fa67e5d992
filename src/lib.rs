// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod seed;
pub mod store;

pub use crate::core::pipeline::QueryPipeline;
pub use crate::core::types::{MatchMode, Resolution};
pub use crate::error::{AnswerError, DependencyFailure};
