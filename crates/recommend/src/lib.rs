//! Resource recommendation.
//!
//! Keyword-driven learning resource suggestions for tasks.

#![warn(missing_docs)]

pub mod catalog;
pub mod recommender;

pub use catalog::{KeywordMapping, ResourceCatalog};
pub use recommender::ResourceRecommendation;
