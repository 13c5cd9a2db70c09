//! Translate an incoming clause document.

pub mod boolean;
pub mod clause;
pub mod compound;
pub mod full_text;
pub mod pattern;
pub mod range;
pub mod term;
pub mod values;

use crate::translation::error::Error;
use crate::translation::helpers::{self, Env};
use clause::Clause;

use query_dsl_configuration::TranslationSettings;
use query_engine_sql::sql::predicate::Predicate;
use serde_json::Value;

/// Translate a clause document into a filter predicate using the default settings.
///
/// Never fails: anything that cannot be translated comes back as an untranslatable
/// predicate.
pub fn translate(document: &Value) -> Predicate {
    translate_with(&TranslationSettings::default(), document)
}

/// Translate a clause document into a filter predicate.
///
/// Structural faults anywhere in the document are downgraded here, and only here, to
/// an untranslatable predicate carrying the error.
pub fn translate_with(settings: &TranslationSettings, document: &Value) -> Predicate {
    match translate_clause(&Env::new(settings), document) {
        Ok(predicate) => predicate,
        Err(error) => {
            tracing::warn!(%error, %document, "unable to translate query");
            Predicate::untranslatable(format!("Invalid {error}"), "Invalid query")
        }
    }
}

/// Translate one clause document, recursing into nested ones.
pub fn translate_clause(env: &Env, document: &Value) -> Result<Predicate, Error> {
    let env = env.descend();
    if env.depth() > env.max_depth() {
        tracing::warn!(
            max_depth = env.max_depth(),
            "clause nesting exceeds the maximum depth"
        );
        return Ok(Predicate::untranslatable(
            "nesting too deep",
            format!(
                "Invalid query, nesting depth exceeds {}",
                env.max_depth()
            ),
        ));
    }

    let clause = Clause::classify(helpers::as_object("clause", document)?);
    tracing::debug!(kind = clause.kind(), depth = env.depth(), "translating clause");

    match clause {
        Clause::Bool(body) => boolean::translate_bool(&env, body),
        Clause::Query { inner, alone } => compound::translate_query(&env, inner, alone),
        Clause::Boosting(body) => compound::translate_boosting(&env, body),
        Clause::ConstantScore(body) => compound::translate_constant_score(&env, body),
        Clause::DisMax(body) => compound::translate_dis_max(&env, body),
        Clause::Nested(body) => compound::translate_nested(&env, body),
        Clause::MultiMatch(body) => full_text::translate_multi_match(body),
        Clause::QueryString(body) => full_text::translate_query_string(body),
        Clause::SimpleQueryString(body) => full_text::translate_simple_query_string(body),
        Clause::Range(body) => range::translate_range(body),
        Clause::Term(body) => term::translate_term(body, "term"),
        Clause::Terms(body) => term::translate_term(body, "terms"),
        Clause::Match(body) => term::translate_match(body, "match"),
        Clause::MatchPhrase(body) => term::translate_match(body, "match_phrase"),
        Clause::Exists(body) => term::translate_exists(body),
        Clause::MatchAll(body) => term::translate_match_all(body),
        Clause::Wildcard(body) => pattern::translate_wildcard(body),
        Clause::Prefix(body) => pattern::translate_prefix(body),
        Clause::Unrecognized(keys) => Ok(Predicate::untranslatable(
            "Not implemented yet",
            format!("Invalid query {}", keys.join(",")),
        )),
    }
}
