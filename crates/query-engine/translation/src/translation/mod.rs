//! Translate a search query clause document into a filter predicate.

pub mod error;
pub mod helpers;
pub mod query;
