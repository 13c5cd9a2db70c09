//! Record translated queries for offline review.
//!
//! Each query is translated and appended to either the system or the user query file,
//! with a PASS or FAIL marker. Failed translations, and every query against a user
//! index, are written out in full.

pub mod error;
pub mod log;
pub mod record;

pub use error::Error;
pub use log::QueryLog;
pub use record::{format_record, Destination};
