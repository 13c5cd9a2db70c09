use std::fs;
use std::path::PathBuf;

use query_engine_translation::translation;

/// Translate the goldenfile request and render the result for a snapshot.
pub fn test_translation(testname: &str) -> anyhow::Result<String> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let request: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;

    let predicate = translation::query::translate(&request);

    let notes: String = predicate
        .notes
        .iter()
        .map(|note| format!("\n- {note}"))
        .collect();

    Ok(format!(
        "{}\n\ntranslatable: {}\nnotes:{}",
        predicate.expression, predicate.translatable, notes
    ))
}
