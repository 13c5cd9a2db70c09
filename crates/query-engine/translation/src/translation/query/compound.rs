//! Translate the clauses that wrap other clauses: `query`, `boosting`, `constant_score`,
//! `dis_max` and `nested`. Scoring is not modeled, so each one reduces to the filtering
//! behaviour of what it wraps.

use super::translate_clause;
use crate::translation::error::Error;
use crate::translation::helpers::{self, Env};

use query_engine_sql::sql;
use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// A `query` wrapper must be the only key of its document.
pub fn translate_query(env: &Env, inner: &Value, alone: bool) -> Result<Predicate, Error> {
    if alone {
        translate_clause(env, inner)
    } else {
        Ok(Predicate::untranslatable("Need only 1 query", "Invalid query"))
    }
}

/// Keep the `positive` clause and drop the `negative` one.
pub fn translate_boosting(env: &Env, body: &Value) -> Result<Predicate, Error> {
    let boosting = helpers::as_object("boosting", body)?;
    let positive = helpers::required("boosting", boosting, "positive")?;
    Ok(translate_clause(env, positive)?.with_note("skipping boosting"))
}

pub fn translate_constant_score(env: &Env, body: &Value) -> Result<Predicate, Error> {
    let constant_score = helpers::as_object("constant_score", body)?;
    let filter = helpers::required("constant_score", constant_score, "filter")?;
    Ok(translate_clause(env, filter)?.with_note("skipping constant score"))
}

/// A disjunction of the `queries`, ignoring how ties are broken.
pub fn translate_dis_max(env: &Env, body: &Value) -> Result<Predicate, Error> {
    let dis_max = helpers::as_object("dis_max", body)?;
    let queries = helpers::as_array(
        "dis_max",
        "queries",
        helpers::required("dis_max", dis_max, "queries")?,
    )?;
    let translated = queries
        .iter()
        .map(|query| translate_clause(env, query))
        .collect::<Result<Vec<_>, Error>>()?;
    if translated.is_empty() {
        return Ok(Predicate::untranslatable(
            "dis_max without queries",
            "Invalid dis_max",
        ));
    }
    Ok(sql::helpers::or(translated).with_note("skipping dis_max"))
}

/// The `path` is dropped, only the inner `query` is translated.
pub fn translate_nested(env: &Env, body: &Value) -> Result<Predicate, Error> {
    let nested = helpers::as_object("nested", body)?;
    match (nested.len(), nested.get("path"), nested.get("query")) {
        (2, Some(_), Some(query)) => translate_clause(env, query),
        _ => Ok(Predicate::untranslatable(
            "not supported nested",
            "Invalid nested",
        )),
    }
}
