//! Recognise which kind of clause a document is.

use serde_json::{Map, Value};

/// A clause document, tagged by the first recognised key it carries.
///
/// Each variant borrows the body stored under its key.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause<'a> {
    Bool(&'a Value),
    /// A `query` wrapper. `alone` is false when the wrapper has sibling keys.
    Query {
        inner: &'a Value,
        alone: bool,
    },
    Boosting(&'a Value),
    ConstantScore(&'a Value),
    DisMax(&'a Value),
    MultiMatch(&'a Value),
    Range(&'a Value),
    Term(&'a Value),
    Terms(&'a Value),
    Match(&'a Value),
    MatchPhrase(&'a Value),
    Exists(&'a Value),
    SimpleQueryString(&'a Value),
    MatchAll(&'a Value),
    Wildcard(&'a Value),
    Prefix(&'a Value),
    Nested(&'a Value),
    QueryString(&'a Value),
    /// None of the recognised keys is present. Holds every key of the document.
    Unrecognized(Vec<&'a str>),
}

impl<'a> Clause<'a> {
    /// Classify a clause document. When several recognised keys are present, the one
    /// listed first here wins.
    pub fn classify(document: &'a Map<String, Value>) -> Clause<'a> {
        let get = |key: &str| document.get(key);

        if let Some(body) = get("bool") {
            Clause::Bool(body)
        } else if let Some(inner) = get("query") {
            Clause::Query {
                inner,
                alone: document.len() == 1,
            }
        } else if let Some(body) = get("boosting") {
            Clause::Boosting(body)
        } else if let Some(body) = get("constant_score") {
            Clause::ConstantScore(body)
        } else if let Some(body) = get("dis_max") {
            Clause::DisMax(body)
        } else if let Some(body) = get("multi_match") {
            Clause::MultiMatch(body)
        } else if let Some(body) = get("range") {
            Clause::Range(body)
        } else if let Some(body) = get("term") {
            Clause::Term(body)
        } else if let Some(body) = get("terms") {
            Clause::Terms(body)
        } else if let Some(body) = get("match") {
            Clause::Match(body)
        } else if let Some(body) = get("match_phrase") {
            Clause::MatchPhrase(body)
        } else if let Some(body) = get("exists") {
            Clause::Exists(body)
        } else if let Some(body) = get("simple_query_string") {
            Clause::SimpleQueryString(body)
        } else if let Some(body) = get("match_all") {
            Clause::MatchAll(body)
        } else if let Some(body) = get("wildcard") {
            Clause::Wildcard(body)
        } else if let Some(body) = get("prefix") {
            Clause::Prefix(body)
        } else if let Some(body) = get("nested") {
            Clause::Nested(body)
        } else if let Some(body) = get("query_string") {
            Clause::QueryString(body)
        } else {
            Clause::Unrecognized(document.keys().map(String::as_str).collect())
        }
    }

    /// The key this clause was recognised by.
    pub fn kind(&self) -> &'static str {
        match self {
            Clause::Bool(_) => "bool",
            Clause::Query { .. } => "query",
            Clause::Boosting(_) => "boosting",
            Clause::ConstantScore(_) => "constant_score",
            Clause::DisMax(_) => "dis_max",
            Clause::MultiMatch(_) => "multi_match",
            Clause::Range(_) => "range",
            Clause::Term(_) => "term",
            Clause::Terms(_) => "terms",
            Clause::Match(_) => "match",
            Clause::MatchPhrase(_) => "match_phrase",
            Clause::Exists(_) => "exists",
            Clause::SimpleQueryString(_) => "simple_query_string",
            Clause::MatchAll(_) => "match_all",
            Clause::Wildcard(_) => "wildcard",
            Clause::Prefix(_) => "prefix",
            Clause::Nested(_) => "nested",
            Clause::QueryString(_) => "query_string",
            Clause::Unrecognized(_) => "unrecognized",
        }
    }
}
