//! Type definition of a translated filter predicate.

use serde::{Deserialize, Serialize};

/// The outcome of translating one clause document.
///
/// An expression is always produced. When the clause could not be translated
/// faithfully the expression is a human-readable placeholder, `translatable` is
/// `false`, and `notes` say why.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Predicate {
    /// The generated predicate text.
    pub expression: String,
    /// Whether this expression and everything composed into it is known to be correct.
    pub translatable: bool,
    /// Skipped or degraded constructs, in the order they were found.
    pub notes: Vec<String>,
}

impl Predicate {
    /// A faithful translation with no notes.
    pub fn translated(expression: impl Into<String>) -> Predicate {
        Predicate {
            expression: expression.into(),
            translatable: true,
            notes: vec![],
        }
    }

    /// A failed translation: a placeholder expression and the note describing the
    /// invalid construct.
    pub fn untranslatable(expression: impl Into<String>, note: impl Into<String>) -> Predicate {
        Predicate {
            expression: expression.into(),
            translatable: false,
            notes: vec![note.into()],
        }
    }

    /// The same predicate with one more note at the end.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Predicate {
        self.notes.push(note.into());
        self
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(expression: {}, notes: [{}], translatable: {})",
            self.expression,
            self.notes.join(", "),
            self.translatable
        )
    }
}
