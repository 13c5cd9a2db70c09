//! Helpers for composing predicates into boolean expressions.

use super::predicate::Predicate;

/// The expression matching every document. The conjunction of nothing.
pub const MATCH_EVERYTHING: &str = "*";

// Folding //

/// Join the expressions with `separator`, and fold `translatable` and the notes of every
/// predicate in order.
fn fold(predicates: Vec<Predicate>, separator: &str) -> (String, bool, Vec<String>) {
    let mut expressions = Vec::with_capacity(predicates.len());
    let mut translatable = true;
    let mut notes = vec![];

    for predicate in predicates {
        expressions.push(predicate.expression);
        translatable &= predicate.translatable;
        notes.extend(predicate.notes);
    }

    (expressions.join(separator), translatable, notes)
}

// Combinators //

/// Build a conjunction.
///
/// Nothing becomes [`MATCH_EVERYTHING`], a single predicate passes through as is, and
/// more than one is wrapped as `(p1 AND p2 AND ...)`.
pub fn and(predicates: Vec<Predicate>) -> Predicate {
    let count = predicates.len();
    let (joined, translatable, notes) = fold(predicates, " AND ");
    let expression = match count {
        0 => MATCH_EVERYTHING.to_string(),
        1 => joined,
        _ => format!("({joined})"),
    };
    Predicate {
        expression,
        translatable,
        notes,
    }
}

/// Build a disjunction. Always parenthesized, even around a single predicate.
pub fn or(predicates: Vec<Predicate>) -> Predicate {
    let (joined, translatable, notes) = fold(predicates, " OR ");
    Predicate {
        expression: format!("({joined})"),
        translatable,
        notes,
    }
}

/// Negate a predicate, keeping its flag and notes.
pub fn not(predicate: Predicate) -> Predicate {
    Predicate {
        expression: format!("(NOT {})", predicate.expression),
        ..predicate
    }
}
