//! Translate `bool` clauses.
//!
//! The predicate language only has AND, OR and NOT, so `minimum_should_match` is
//! reduced to two cases: 0, where `should` clauses only affect scoring and are dropped,
//! and 1, where at least one of them must hold.

use super::translate_clause;
use super::values::render;
use crate::translation::error::Error;
use crate::translation::helpers::{self, Env};

use query_engine_sql::sql;
use query_engine_sql::sql::predicate::Predicate;
use serde_json::{Map, Value};

/// How many `should` clauses must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MinimumShouldMatch {
    Zero,
    One,
}

pub fn translate_bool(env: &Env, body: &Value) -> Result<Predicate, Error> {
    let bool_query = helpers::as_object("bool", body)?;
    let mut predicates = vec![];

    for key in ["must", "filter"] {
        predicates.extend(translate_all(env, bool_query, key)?);
    }
    let required_count = predicates.len();
    let required_notes: usize = predicates.iter().map(|p| p.notes.len()).sum();

    let (minimum_should_match, ignored) = match bool_query.get("minimum_should_match") {
        Some(value) => match explicit_minimum_should_match(value) {
            Some(minimum) => (minimum, None),
            None => (MinimumShouldMatch::One, Some(value)),
        },
        // several required clauses turn should clauses into scoring hints
        None if required_count > 1 => (MinimumShouldMatch::Zero, None),
        None => (MinimumShouldMatch::One, None),
    };

    if minimum_should_match == MinimumShouldMatch::One {
        let should = translate_all(env, bool_query, "should")?;
        if !should.is_empty() {
            predicates.push(sql::helpers::or(should));
        }
    }

    let must_not = translate_all(env, bool_query, "must_not")?;
    if !must_not.is_empty() {
        predicates.push(sql::helpers::not(sql::helpers::or(must_not)));
    }

    let mut result = sql::helpers::and(predicates);
    if let Some(ignored) = ignored {
        // the note belongs right after those of the required clauses
        result.notes.insert(
            required_notes,
            format!(
                "skipping minimum_should_match {}, assuming 1",
                render(ignored)
            ),
        );
        result.translatable = false;
    }
    Ok(result)
}

/// Translate every clause under `key`. A missing key holds no clauses.
fn translate_all(
    env: &Env,
    bool_query: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<Predicate>, Error> {
    match bool_query.get(key) {
        None => Ok(vec![]),
        Some(value) => helpers::clauses("bool", key, value)?
            .into_iter()
            .map(|clause| translate_clause(env, clause))
            .collect(),
    }
}

/// Only 0 and 1 are honoured, given as numbers or numeric strings. `1.0` is 1.
fn explicit_minimum_should_match(value: &Value) -> Option<MinimumShouldMatch> {
    let minimum = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match minimum {
        Some(m) if m == 0.0 => Some(MinimumShouldMatch::Zero),
        Some(m) if (m - 1.0).abs() < f64::EPSILON => Some(MinimumShouldMatch::One),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_dsl_configuration::TranslationSettings;
    use serde_json::json;
    use similar_asserts::assert_eq;

    fn translate(body: &Value) -> Predicate {
        let settings = TranslationSettings::default();
        translate_bool(&Env::new(&settings), body).unwrap()
    }

    #[test]
    fn single_must_with_should() {
        let body = json!({
            "must": [{"term": {"a": "1"}}],
            "should": [{"term": {"b": "2"}}],
        });
        assert_eq!(translate(&body), Predicate::translated("(a = 1 AND (b = 2))"));
    }

    #[test]
    fn several_required_clauses_drop_should() {
        let body = json!({
            "must": [{"term": {"a": "1"}}, {"term": {"b": "2"}}],
            "should": [{"term": {"c": "3"}}],
        });
        assert_eq!(translate(&body), Predicate::translated("(a = 1 AND b = 2)"));
    }

    #[test]
    fn must_and_filter_count_together() {
        let body = json!({
            "must": {"term": {"a": "1"}},
            "filter": {"term": {"b": "2"}},
            "should": {"geo_shape": {}},
        });
        // the unsupported should clause is never looked at
        assert_eq!(translate(&body), Predicate::translated("(a = 1 AND b = 2)"));
    }

    #[test]
    fn explicit_minimum_should_match_keeps_should() {
        let body = json!({
            "must": [{"term": {"a": "1"}}, {"term": {"b": "2"}}],
            "should": [{"term": {"c": "3"}}, {"term": {"d": "4"}}],
            "minimum_should_match": 1,
        });
        assert_eq!(
            translate(&body).expression,
            "(a = 1 AND b = 2 AND (c = 3 OR d = 4))"
        );
    }

    #[test]
    fn explicit_zero_drops_should() {
        let body = json!({
            "should": [{"term": {"c": "3"}}],
            "minimum_should_match": "0",
        });
        assert_eq!(translate(&body), Predicate::translated("*"));
    }

    #[test]
    fn minimums_written_as_floats_are_honoured() {
        let one = json!({
            "should": [{"term": {"a": "1"}}],
            "minimum_should_match": 1.0,
        });
        assert_eq!(translate(&one), Predicate::translated("(a = 1)"));

        let zero = json!({
            "must": {"term": {"b": "2"}},
            "should": [{"term": {"a": "1"}}],
            "minimum_should_match": 0.0,
        });
        assert_eq!(translate(&zero), Predicate::translated("b = 2"));
    }

    #[test]
    fn fractional_minimums_are_demoted() {
        let body = json!({
            "should": [{"term": {"a": "1"}}],
            "minimum_should_match": 0.5,
        });
        let result = translate(&body);
        assert_eq!(result.expression, "(a = 1)");
        assert_eq!(
            result.notes,
            vec!["skipping minimum_should_match 0.5, assuming 1".to_string()]
        );
    }

    #[test]
    fn other_minimums_are_demoted_to_one() {
        let body = json!({
            "must": {"term": {"a": "1"}},
            "should": [{"term": {"c": "3"}}, {"term": {"d": "4"}}],
            "minimum_should_match": 2,
        });
        let result = translate(&body);
        assert_eq!(result.expression, "(a = 1 AND (c = 3 OR d = 4))");
        assert!(!result.translatable);
        assert_eq!(
            result.notes,
            vec!["skipping minimum_should_match 2, assuming 1".to_string()]
        );
    }

    #[test]
    fn demotion_note_follows_the_required_notes() {
        let body = json!({
            "filter": {"boosting": {"positive": {"term": {"a": "1"}}}},
            "should": {"dis_max": {"queries": [{"term": {"b": "2"}}]}},
            "minimum_should_match": "75%",
        });
        assert_eq!(
            translate(&body).notes,
            vec![
                "skipping boosting".to_string(),
                "skipping minimum_should_match 75%, assuming 1".to_string(),
                "skipping dis_max".to_string(),
            ]
        );
    }

    #[test]
    fn must_not_is_a_negated_disjunction() {
        let body = json!({
            "filter": [{"term": {"a": "1"}}],
            "must_not": [{"term": {"b": "2"}}, {"exists": {"field": "c"}}],
        });
        assert_eq!(
            translate(&body).expression,
            "(a = 1 AND (NOT (b = 2 OR exists c)))"
        );
    }

    #[test]
    fn only_must_not() {
        let body = json!({"must_not": {"term": {"b": "2"}}});
        assert_eq!(translate(&body).expression, "(NOT (b = 2))");
    }

    #[test]
    fn empty_bool_matches_everything() {
        assert_eq!(translate(&json!({})), Predicate::translated("*"));
    }

    #[test]
    fn empty_lists_are_the_same_as_missing_ones() {
        let body = json!({"must": [], "should": [], "must_not": []});
        assert_eq!(translate(&body), Predicate::translated("*"));
    }

    #[test]
    fn untranslatable_children_mark_the_whole_bool() {
        let body = json!({
            "must": [{"term": {"a": "1"}}],
            "must_not": [{"wildcard": {"name": {"value": "*x"}}}],
        });
        let result = translate(&body);
        assert!(!result.translatable);
        assert_eq!(
            result.notes,
            vec!["Invalid wildcard, easy * should be in the end of wildcard".to_string()]
        );
    }

    #[test]
    fn clause_lists_must_hold_clauses() {
        let settings = TranslationSettings::default();
        let body = json!({"must": 3});
        assert!(matches!(
            translate_bool(&Env::new(&settings), &body),
            Err(Error::UnexpectedType { clause: "bool", .. })
        ));
    }
}
