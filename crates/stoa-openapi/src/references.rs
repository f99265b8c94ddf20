//! Schema reference rewriting.
//!
//! Route and registry schemas refer to named schemas by bare identifier
//! (`{"$ref": "user"}`). Inside an OpenAPI document those names live
//! under `components.schemas`, so every bare local identifier must be
//! rewritten to `#/components/schemas/<name>`. All other reference forms
//! (URLs, fragment pointers, file paths) pass through untouched, which
//! also makes the rewrite idempotent.

use serde_json::Value;
use stoa_core::SchemaKind;
use url::Url;

/// Prefix for component schema references.
const COMPONENTS_PREFIX: &str = "#/components/schemas/";

/// Whether a reference target is a bare local schema identifier.
///
/// Anything empty, fragment-prefixed, path-like, or URL-parseable is not
/// local and must be left alone.
fn is_local_identifier(target: &str) -> bool {
    if target.is_empty() || target.starts_with('#') || target.contains('/') {
        return false;
    }
    Url::parse(target).is_err()
}

/// Rewrites bare local references in a schema value, in place.
///
/// The walk recurses through array `items` (single or tuple form),
/// object `properties`, union `anyOf` branches, and intersection `allOf`
/// branches. Primitive and unrecognized nodes are left untouched, so
/// structurally unusual input degrades to a no-op instead of an error.
///
/// Callers pass an owned copy of any schema that must stay pristine;
/// this function never distinguishes copies from originals.
pub fn update_references(schema: &mut Value) {
    match SchemaKind::of(schema) {
        SchemaKind::Reference => {
            if let Some(Value::String(target)) = schema.get_mut("$ref") {
                if is_local_identifier(target) {
                    *target = format!("{COMPONENTS_PREFIX}{target}");
                }
            }
        }
        SchemaKind::Array => {
            if let Some(items) = schema.get_mut("items") {
                if let Some(tuple) = items.as_array_mut() {
                    for item in tuple {
                        update_references(item);
                    }
                } else {
                    update_references(items);
                }
            }
        }
        SchemaKind::Object => {
            if let Some(properties) = schema.get_mut("properties").and_then(Value::as_object_mut) {
                for property in properties.values_mut() {
                    update_references(property);
                }
            }
        }
        SchemaKind::Union => {
            if let Some(branches) = schema.get_mut("anyOf").and_then(Value::as_array_mut) {
                for branch in branches {
                    update_references(branch);
                }
            }
        }
        SchemaKind::Intersect => {
            if let Some(branches) = schema.get_mut("allOf").and_then(Value::as_array_mut) {
                for branch in branches {
                    update_references(branch);
                }
            }
        }
        SchemaKind::Primitive | SchemaKind::Unrecognized => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rewrites_bare_identifier() {
        let mut schema = json!({"$ref": "a"});
        update_references(&mut schema);
        assert_eq!(schema["$ref"], json!("#/components/schemas/a"));
    }

    #[test]
    fn test_recurses_into_array_items() {
        let mut schema = json!({"type": "array", "items": {"$ref": "a"}});
        update_references(&mut schema);
        assert_eq!(schema["items"]["$ref"], json!("#/components/schemas/a"));
    }

    #[test]
    fn test_recurses_into_tuple_items() {
        let mut schema = json!({"items": [{"$ref": "a"}, {"$ref": "b"}]});
        update_references(&mut schema);
        assert_eq!(schema["items"][0]["$ref"], json!("#/components/schemas/a"));
        assert_eq!(schema["items"][1]["$ref"], json!("#/components/schemas/b"));
    }

    #[test]
    fn test_recurses_into_object_properties() {
        let mut schema = json!({
            "type": "object",
            "properties": {"a": {"$ref": "a"}}
        });
        update_references(&mut schema);
        assert_eq!(schema["properties"]["a"]["$ref"], json!("#/components/schemas/a"));
    }

    #[test]
    fn test_recurses_into_union_branches() {
        let mut schema = json!({
            "anyOf": [
                {"$ref": "a"},
                {"type": "object", "properties": {"a": {"$ref": "a"}}}
            ]
        });
        update_references(&mut schema);
        assert_eq!(schema["anyOf"][0]["$ref"], json!("#/components/schemas/a"));
        assert_eq!(
            schema["anyOf"][1]["properties"]["a"]["$ref"],
            json!("#/components/schemas/a")
        );
    }

    #[test]
    fn test_recurses_into_intersect_branches() {
        let mut schema = json!({
            "allOf": [
                {"$ref": "a"},
                {"type": "object", "properties": {"a": {"$ref": "a"}}}
            ]
        });
        update_references(&mut schema);
        assert_eq!(schema["allOf"][0]["$ref"], json!("#/components/schemas/a"));
        assert_eq!(
            schema["allOf"][1]["properties"]["a"]["$ref"],
            json!("#/components/schemas/a")
        );
    }

    #[test]
    fn test_non_schema_input_is_noop() {
        let mut value = json!(1);
        update_references(&mut value);
        assert_eq!(value, json!(1));

        let mut value = json!({});
        update_references(&mut value);
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_empty_reference_unchanged() {
        let mut schema = json!({"$ref": ""});
        update_references(&mut schema);
        assert_eq!(schema["$ref"], json!(""));
    }

    #[test]
    fn test_external_file_reference_unchanged() {
        let mut schema = json!({"$ref": "schemas/people/Bruce-Wayne.json"});
        update_references(&mut schema);
        assert_eq!(schema["$ref"], json!("schemas/people/Bruce-Wayne.json"));
    }

    #[test]
    fn test_external_sub_schema_reference_unchanged() {
        let mut schema = json!({"$ref": "schemas/places.yaml#/definitions/Gotham-City"});
        update_references(&mut schema);
        assert_eq!(schema["$ref"], json!("schemas/places.yaml#/definitions/Gotham-City"));
    }

    #[test]
    fn test_url_reference_unchanged() {
        let mut schema = json!({"$ref": "http://wayne-enterprises.com/things/batmobile"});
        update_references(&mut schema);
        assert_eq!(schema["$ref"], json!("http://wayne-enterprises.com/things/batmobile"));

        // Scheme-prefixed URIs without slashes are still URLs.
        let mut schema = json!({"$ref": "mailto:bruce@wayne-enterprises.com"});
        update_references(&mut schema);
        assert_eq!(schema["$ref"], json!("mailto:bruce@wayne-enterprises.com"));
    }

    #[test]
    fn test_fragment_reference_unchanged() {
        let mut schema = json!({"$ref": "#/definitions/thing/properties/colors/black-as-the-night"});
        update_references(&mut schema);
        assert_eq!(
            schema["$ref"],
            json!("#/definitions/thing/properties/colors/black-as-the-night")
        );
    }

    #[test]
    fn test_idempotent() {
        let mut schema = json!({
            "type": "object",
            "properties": {
                "a": {"$ref": "a"},
                "b": {"type": "array", "items": {"$ref": "b"}},
                "c": {"anyOf": [{"$ref": "c"}]},
                "d": {"$ref": "http://example.com/d"}
            }
        });
        update_references(&mut schema);
        let once = schema.clone();
        update_references(&mut schema);
        assert_eq!(schema, once);
    }
}
