//! Translate the pattern clauses, `wildcard` and `prefix`, into `like` expressions.

use crate::translation::error::Error;
use crate::translation::helpers;

use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// Only trailing-star patterns on plain fields translate: `<field> like <prefix>%`.
pub fn translate_wildcard(body: &Value) -> Result<Predicate, Error> {
    let wildcard = helpers::as_object("wildcard", body)?;
    let Some((field, pattern)) = helpers::single_entry(wildcard) else {
        return Ok(Predicate::untranslatable(
            "wildcard len supported = 1",
            "Invalid wildcard len",
        ));
    };
    let pattern = pattern_value("wildcard", field, pattern)?;

    if field.is_empty() || !field.chars().all(|c| c.is_alphabetic() || c == '.') {
        return Ok(Predicate::untranslatable(
            "Too hard key for \"wildcard\"",
            "Invalid wildcard, too hard key",
        ));
    }
    if pattern.matches('*').count() > 1 {
        return Ok(Predicate::untranslatable(
            "Too hard query_str for \"wildcard\"",
            "Invalid wildcard, too hard query_str",
        ));
    }
    match pattern.strip_suffix('*') {
        Some(prefix) => Ok(Predicate::translated(format!("{field} like {prefix}%"))),
        None => Ok(Predicate::untranslatable(
            "easy * should be in the end of wildcard",
            "Invalid wildcard, easy * should be in the end of wildcard",
        )),
    }
}

/// `<field> like <value>%`.
pub fn translate_prefix(body: &Value) -> Result<Predicate, Error> {
    let prefix = helpers::as_object("prefix", body)?;
    let Some((field, value)) = helpers::single_entry(prefix) else {
        return Ok(Predicate::untranslatable(
            "prefix len supported = 1",
            "Invalid prefix len",
        ));
    };
    if let Value::Object(options) = value {
        if options.len() != 1 || !options.contains_key("value") {
            return Ok(Predicate::untranslatable("Invalid prefix", "Invalid prefix"));
        }
    }
    let value = pattern_value("prefix", field, value)?;
    Ok(Predicate::translated(format!("{field} like {value}%")))
}

/// Patterns come either as a bare string or as an object holding it under `value`.
fn pattern_value<'a>(
    clause: &'static str,
    field: &str,
    pattern: &'a Value,
) -> Result<&'a str, Error> {
    match pattern {
        Value::Object(options) => {
            let value = helpers::required(clause, options, "value")?;
            helpers::as_str(clause, "value", value)
        }
        other => helpers::as_str(clause, field, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn trailing_star_becomes_like() {
        assert_eq!(
            translate_wildcard(&json!({"name": {"value": "ab*"}})).unwrap(),
            Predicate::translated("name like ab%")
        );
        assert_eq!(
            translate_wildcard(&json!({"host.name": "web-*"}))
                .unwrap()
                .expression,
            "host.name like web-%"
        );
    }

    #[test]
    fn more_than_one_star_is_too_hard() {
        assert_eq!(
            translate_wildcard(&json!({"name": {"value": "ab*cd*"}})).unwrap(),
            Predicate::untranslatable(
                "Too hard query_str for \"wildcard\"",
                "Invalid wildcard, too hard query_str"
            )
        );
    }

    #[test]
    fn star_must_be_last() {
        assert_eq!(
            translate_wildcard(&json!({"name": {"value": "*ab"}}))
                .unwrap()
                .notes,
            vec!["Invalid wildcard, easy * should be in the end of wildcard".to_string()]
        );
        assert!(
            !translate_wildcard(&json!({"name": {"value": "ab"}}))
                .unwrap()
                .translatable
        );
    }

    #[test]
    fn field_names_are_restricted() {
        assert_eq!(
            translate_wildcard(&json!({"user_name": {"value": "ab*"}}))
                .unwrap()
                .notes,
            vec!["Invalid wildcard, too hard key".to_string()]
        );
    }

    #[test]
    fn empty_field_names_are_rejected() {
        assert_eq!(
            translate_wildcard(&json!({"": "a*"})).unwrap(),
            Predicate::untranslatable(
                "Too hard key for \"wildcard\"",
                "Invalid wildcard, too hard key"
            )
        );
    }

    #[test]
    fn wildcard_on_two_fields_is_rejected() {
        assert_eq!(
            translate_wildcard(&json!({"a": "x*", "b": "y*"}))
                .unwrap()
                .expression,
            "wildcard len supported = 1"
        );
    }

    #[test]
    fn wildcard_object_without_value_is_a_structural_error() {
        assert_eq!(
            translate_wildcard(&json!({"name": {"wildcard": "ab*"}})),
            Err(Error::MissingKey {
                clause: "wildcard",
                key: "value"
            })
        );
    }

    #[test]
    fn prefix_accepts_both_forms() {
        assert_eq!(
            translate_prefix(&json!({"path": "/var/log"})).unwrap(),
            Predicate::translated("path like /var/log%")
        );
        assert_eq!(
            translate_prefix(&json!({"path": {"value": "/var"}}))
                .unwrap()
                .expression,
            "path like /var%"
        );
    }

    #[test]
    fn prefix_options_other_than_value_are_rejected() {
        assert_eq!(
            translate_prefix(&json!({"path": {"value": "/var", "case_insensitive": true}}))
                .unwrap(),
            Predicate::untranslatable("Invalid prefix", "Invalid prefix")
        );
    }

    #[test]
    fn prefix_needs_exactly_one_field() {
        assert_eq!(
            translate_prefix(&json!({})).unwrap(),
            Predicate::untranslatable("prefix len supported = 1", "Invalid prefix len")
        );
    }

    #[test]
    fn prefix_value_must_be_a_string() {
        assert!(matches!(
            translate_prefix(&json!({"code": 40})),
            Err(Error::UnexpectedType { clause: "prefix", .. })
        ));
    }
}
