//! Translate the full-text clauses: `multi_match`, `query_string` and
//! `simple_query_string`.

use super::values::render;
use crate::translation::error::Error;
use crate::translation::helpers;

use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// Only the default `best_fields` type is supported.
pub fn translate_multi_match(body: &Value) -> Result<Predicate, Error> {
    let multi_match = helpers::as_object("multi_match", body)?;
    match multi_match.get("type") {
        None => {}
        Some(Value::String(match_type)) if match_type == "best_fields" => {}
        Some(_) => {
            return Ok(Predicate::untranslatable(
                "Not implemented",
                "Invalid multi_match",
            ))
        }
    }
    let query = helpers::required("multi_match", multi_match, "query")?;
    Ok(Predicate::translated(format!(
        "any_field contains {}",
        render(query)
    )))
}

pub fn translate_query_string(body: &Value) -> Result<Predicate, Error> {
    let query_string = helpers::as_object("query_string", body)?;
    let field = query_string
        .get("default_field")
        .map_or_else(|| "*".to_string(), render);
    let query = helpers::required("query_string", query_string, "query")?;
    Ok(Predicate::translated(format!(
        "{field} queries {}",
        render(query)
    )))
}

/// Only "easy" simple query strings translate: a single plain field (or every field)
/// searched for plain words.
pub fn translate_simple_query_string(body: &Value) -> Result<Predicate, Error> {
    let simple_query_string = helpers::as_object("simple_query_string", body)?;
    let invalid = |expression: &str| -> Result<Predicate, Error> {
        Ok(Predicate::untranslatable(
            expression,
            "Invalid simple_query_string",
        ))
    };

    if !matches!(simple_query_string.len(), 3 | 4) {
        return invalid("simple_query_string len supported = 3 or 4");
    }
    for key in ["query", "fields", "default_operator"] {
        if !simple_query_string.contains_key(key) {
            return invalid(&format!("simple_query_string lack of {key}"));
        }
    }

    let query = helpers::as_str(
        "simple_query_string",
        "query",
        &simple_query_string["query"],
    )?;
    let fields = helpers::as_array(
        "simple_query_string",
        "fields",
        &simple_query_string["fields"],
    )?
    .iter()
    .map(|field| helpers::as_str("simple_query_string", "fields", field))
    .collect::<Result<Vec<&str>, Error>>()?;

    let searches_everything = fields.is_empty() || fields == ["*"];

    // lenient is only understood when searching every field
    let mut lenient = false;
    if simple_query_string.len() == 4 {
        if !simple_query_string.contains_key("lenient") {
            return invalid("simple_query_string lack of lenient");
        }
        if fields.first() != Some(&"*") {
            return invalid("lenient + hard simple_query_string");
        }
        lenient = true;
    }

    if let [field] = fields.as_slice() {
        if (lenient || is_plain_field(field)) && is_plain_query(query) {
            return Ok(Predicate::translated(format!("{field} queries {query}")));
        }
    }
    if searches_everything {
        return Ok(Predicate::translated(format!("all_fields {query}")));
    }
    Ok(Predicate::untranslatable(
        "\"hard\" simple_query_string not supported",
        "\"Hard\" simple_query_string",
    ))
}

fn is_plain_field(field: &str) -> bool {
    field
        .chars()
        .all(|c| c.is_alphabetic() || matches!(c, '-' | '.' | '_'))
}

fn is_plain_query(query: &str) -> bool {
    query
        .chars()
        .all(|c| c.is_alphabetic() || c.is_numeric() || matches!(c, '_' | ' ' | '-'))
}
