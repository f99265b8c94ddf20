//! Mapping schema `examples` annotations to OpenAPI named examples.

use indexmap::IndexMap;
use serde_json::Value;

use crate::document::Example;

/// Maps a schema's `examples` annotation to an OpenAPI examples object.
///
/// A single example is keyed `"Example"`; several examples are keyed
/// `"Example 0"`, `"Example 1"`, ... in sequence order. Every entry
/// shares the schema's `description` and uses its `title` as summary.
///
/// Returns `None` when the annotation is absent, not a sequence, or
/// empty; an invalid annotation never produces a partial result.
#[must_use]
pub fn map_examples(schema: &Value) -> Option<IndexMap<String, Example>> {
    let object = schema.as_object()?;
    let examples = object.get("examples")?.as_array()?;
    if examples.is_empty() {
        return None;
    }
    let description = object.get("description").and_then(Value::as_str).map(String::from);
    let summary = object.get("title").and_then(Value::as_str).map(String::from);
    if let [value] = examples.as_slice() {
        let mut map = IndexMap::new();
        map.insert(
            "Example".to_string(),
            Example {
                description,
                summary,
                value: value.clone(),
            },
        );
        return Some(map);
    }
    Some(
        examples
            .iter()
            .enumerate()
            .map(|(index, value)| {
                (
                    format!("Example {index}"),
                    Example {
                        description: description.clone(),
                        summary: summary.clone(),
                        value: value.clone(),
                    },
                )
            })
            .collect(),
    )
}
