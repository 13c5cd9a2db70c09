//! The filter-predicate side of a translation: the value every translation step returns
//! and the helpers that compose those values into boolean expressions.

pub mod helpers;
pub mod predicate;
