//! Translate the single-field clauses: `term`, `terms`, `match`, `match_phrase`,
//! `exists` and `match_all`.

use super::values::render;
use crate::translation::error::Error;
use crate::translation::helpers;

use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// `term` and `terms`: `<field> = <value>`.
pub fn translate_term(body: &Value, term_type: &'static str) -> Result<Predicate, Error> {
    let term = helpers::as_object(term_type, body)?;
    let Some((field, value)) = helpers::single_entry(term) else {
        return Ok(Predicate::untranslatable(
            format!("{term_type} len should be 1"),
            format!("Invalid {term_type}"),
        ));
    };
    Ok(match operand(value, "value") {
        Some(value) => Predicate::translated(format!("{field} = {}", render(value))),
        None => unsupported_options(term_type),
    })
}

/// `match` and `match_phrase`: `<field> matches <value>` or `<field> match_phrases <value>`.
pub fn translate_match(body: &Value, match_type: &'static str) -> Result<Predicate, Error> {
    let match_query = helpers::as_object(match_type, body)?;
    let Some((field, value)) = helpers::single_entry(match_query) else {
        return Ok(Predicate::untranslatable(
            format!("{match_type} len supported = 1"),
            format!("Invalid {match_type}"),
        ));
    };
    Ok(match operand(value, "query") {
        Some(value) => {
            let suffix = if match_type.ends_with('e') { "s" } else { "es" };
            Predicate::translated(format!("{field} {match_type}{suffix} {}", render(value)))
        }
        None => unsupported_options(match_type),
    })
}

/// The operand of a field, which the long form holds under `key`. Besides the operand
/// only `boost` is understood, as it affects scoring alone.
fn operand<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(options) => {
            let operand = options.get(key)?;
            options
                .keys()
                .all(|option| option == key || option == "boost")
                .then_some(operand)
        }
        other => Some(other),
    }
}

fn unsupported_options(clause: &str) -> Predicate {
    Predicate::untranslatable(
        format!("{clause} options not supported"),
        format!("Invalid {clause}"),
    )
}

pub fn translate_exists(body: &Value) -> Result<Predicate, Error> {
    let exists = helpers::as_object("exists", body)?;
    if exists.len() != 1 {
        return Ok(Predicate::untranslatable(
            "exists len supported = 1",
            "Invalid exists",
        ));
    }
    let field = helpers::required("exists", exists, "field")?;
    Ok(Predicate::translated(format!("exists {}", render(field))))
}

pub fn translate_match_all(body: &Value) -> Result<Predicate, Error> {
    let match_all = helpers::as_object("match_all", body)?;
    Ok(if match_all.is_empty() {
        Predicate::translated("match_all")
    } else {
        Predicate::untranslatable("match_all len supported = 0", "Invalid match_all")
    })
}
