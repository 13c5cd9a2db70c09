//! Helpers for walking clause documents.

use super::error::Error;
use query_dsl_configuration::TranslationSettings;
use serde_json::{Map, Value};

/// Static information for the translation, and how deep into the document we are.
#[derive(Debug, Clone, Copy)]
pub struct Env<'s> {
    settings: &'s TranslationSettings,
    depth: usize,
}

impl<'s> Env<'s> {
    /// An environment for the top of a document.
    pub fn new(settings: &'s TranslationSettings) -> Env<'s> {
        Env { settings, depth: 0 }
    }

    /// The environment one clause document further down.
    #[must_use]
    pub fn descend(&self) -> Env<'s> {
        Env {
            settings: self.settings,
            depth: self.depth + 1,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.settings.max_depth
    }
}

/// The name of a JSON value's type, for error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn as_object<'a>(
    context: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, Error> {
    value.as_object().ok_or(Error::NotAnObject {
        context,
        found: json_type(value),
    })
}

/// Look up a key the clause cannot do without.
pub fn required<'a>(
    clause: &'static str,
    object: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, Error> {
    object.get(key).ok_or(Error::MissingKey { clause, key })
}

pub fn as_str<'a>(clause: &'static str, key: &str, value: &'a Value) -> Result<&'a str, Error> {
    value.as_str().ok_or_else(|| Error::UnexpectedType {
        clause,
        key: key.to_string(),
        expected: "a string",
        found: json_type(value),
    })
}

pub fn as_array<'a>(
    clause: &'static str,
    key: &str,
    value: &'a Value,
) -> Result<&'a Vec<Value>, Error> {
    value.as_array().ok_or_else(|| Error::UnexpectedType {
        clause,
        key: key.to_string(),
        expected: "an array",
        found: json_type(value),
    })
}

/// The only entry of a map, if it has exactly one.
pub fn single_entry(object: &Map<String, Value>) -> Option<(&String, &Value)> {
    if object.len() == 1 {
        object.iter().next()
    } else {
        None
    }
}

/// Sub-clauses may be given as one clause document or a list of them.
pub fn clauses<'a>(clause: &'static str, key: &str, value: &'a Value) -> Result<Vec<&'a Value>, Error> {
    match value {
        Value::Array(elements) => Ok(elements.iter().collect()),
        Value::Object(_) => Ok(vec![value]),
        other => Err(Error::UnexpectedType {
            clause,
            key: key.to_string(),
            expected: "a clause or a list of clauses",
            found: json_type(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descending_counts_levels() {
        let settings = TranslationSettings { max_depth: 3 };
        let env = Env::new(&settings);
        assert_eq!(env.depth(), 0);
        assert_eq!(env.descend().descend().depth(), 2);
        assert_eq!(env.max_depth(), 3);
    }

    #[test]
    fn clauses_accept_one_or_many() {
        let one = json!({"term": {"a": "1"}});
        assert_eq!(clauses("bool", "must", &one).unwrap(), vec![&one]);

        let many = json!([{"term": {"a": "1"}}, {"match_all": {}}]);
        assert_eq!(clauses("bool", "must", &many).unwrap().len(), 2);

        assert_eq!(
            clauses("bool", "must", &json!("nope")),
            Err(Error::UnexpectedType {
                clause: "bool",
                key: "must".to_string(),
                expected: "a clause or a list of clauses",
                found: "a string",
            })
        );
    }

    #[test]
    fn single_entry_requires_exactly_one() {
        let empty = Map::new();
        assert!(single_entry(&empty).is_none());

        let one = json!({"status": "active"});
        let (field, value) = single_entry(one.as_object().unwrap()).unwrap();
        assert_eq!(field, "status");
        assert_eq!(value, &json!("active"));

        let two = json!({"a": 1, "b": 2});
        assert!(single_entry(two.as_object().unwrap()).is_none());
    }

    #[test]
    fn missing_keys_are_reported_with_their_clause() {
        let object = json!({"negative": {}});
        let error = required("boosting", object.as_object().unwrap(), "positive").unwrap_err();
        assert_eq!(error.to_string(), "boosting is missing 'positive'");
    }
}
