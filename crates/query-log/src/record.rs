//! The text of a query log record.

use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// Which query file a record goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    System,
    User,
}

/// Render one record.
///
/// The first line carries the verdict, the index and the method. A failed translation
/// is followed by the full predicate. Failed translations and user queries are followed
/// by the pretty-printed document and a blank line.
pub fn format_record(
    index_name: &str,
    method: &str,
    destination: Destination,
    document: &Value,
    predicate: &Predicate,
) -> Result<String, serde_json::Error> {
    let verdict = if predicate.translatable { "PASS" } else { "FAIL" };
    let mut record = format!("{verdict}: {index_name} {method}\n");

    if !predicate.translatable {
        record.push_str(&predicate.to_string());
        record.push('\n');
    }
    if !predicate.translatable || destination == Destination::User {
        record.push_str(&serde_json::to_string_pretty(document)?);
        record.push_str("\n\n");
    }
    Ok(record)
}
