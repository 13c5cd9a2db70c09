//! Translate `range` clauses into conjunctions of comparisons.

use super::values::render;
use crate::translation::error::Error;
use crate::translation::helpers;

use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// Bound keys and their comparison operators, in the order they are written out.
const BOUNDS: [(&str, &str); 4] = [("gte", ">="), ("gt", ">"), ("lt", "<"), ("lte", "<=")];

pub fn translate_range(body: &Value) -> Result<Predicate, Error> {
    let range = helpers::as_object("range", body)?;
    let Some((field, bounds)) = helpers::single_entry(range) else {
        return Ok(if range.is_empty() {
            Predicate::untranslatable("Invalid", "Invalid range, lack of key")
        } else {
            Predicate::untranslatable("range len supported = 1", "Invalid range len")
        });
    };
    let bounds = helpers::as_object("range bounds", bounds)?;

    let comparisons: Vec<String> = BOUNDS
        .iter()
        .filter_map(|(key, operator)| {
            bounds
                .get(*key)
                .map(|value| format!("{field} {operator} {}", render(value)))
        })
        .collect();
    let format = bounds.get("format");

    let mut expression = if comparisons.is_empty() {
        if format.is_none() {
            return Ok(Predicate::untranslatable(
                format!("{field} without bounds"),
                "Invalid range, lack of bound",
            ));
        }
        field.clone()
    } else {
        comparisons.join(" AND ")
    };
    // the format annotates the comparisons, it does not constrain anything itself
    if let Some(format) = format {
        expression.push_str(&format!(" in format {}", render(format)));
    }
    Ok(Predicate::translated(format!("({expression})")))
}
