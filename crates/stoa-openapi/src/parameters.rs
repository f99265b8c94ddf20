//! Extracting OpenAPI parameters from location schemas.
//!
//! A route may declare one object schema per parameter location
//! (`querystring`, `params`, `headers`, `cookies`). Each named property
//! of that schema becomes one OpenAPI parameter object in the operation.

use serde_json::{json, Value};
use stoa_core::SchemaKind;

use crate::document::{Parameter, ParameterIn};
use crate::examples::map_examples;
use crate::references::update_references;

/// Metadata members lifted out of a property schema into the parameter
/// object itself.
const PARAMETER_METADATA: [&str; 5] = ["deprecated", "description", "examples", "explode", "title"];

/// Appends one parameter per named property of a location schema.
///
/// The schema must classify as an object schema; anything else (absent,
/// primitive, malformed) is skipped without error. Properties that are
/// not themselves schema objects are skipped the same way.
///
/// Path parameters are always required; elsewhere a property is required
/// when the parent schema's `required` array names it.
pub fn map_parameters(parameters: &mut Vec<Parameter>, schema: Option<&Value>, location: ParameterIn) {
    let Some(schema) = schema else {
        return;
    };
    if SchemaKind::of(schema) != SchemaKind::Object {
        return;
    }
    let required_names: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    for (name, property) in properties {
        let Some(property_object) = property.as_object() else {
            continue;
        };
        let required = location == ParameterIn::Path || required_names.contains(&name.as_str());
        let examples = map_examples(property);
        let schema_value = if SchemaKind::of(property) == SchemaKind::Reference {
            // A reference property keeps nothing but its target.
            let mut reference = json!({ "$ref": property_object["$ref"].clone() });
            update_references(&mut reference);
            reference
        } else {
            let mut copy = property.clone();
            if let Some(object) = copy.as_object_mut() {
                for member in PARAMETER_METADATA {
                    object.remove(member);
                }
            }
            update_references(&mut copy);
            copy
        };
        parameters.push(Parameter {
            name: name.clone(),
            location,
            required,
            deprecated: property_object.get("deprecated").and_then(Value::as_bool),
            description: property_object
                .get("description")
                .and_then(Value::as_str)
                .map(String::from),
            examples,
            explode: property_object.get("explode").and_then(Value::as_bool),
            schema: schema_value,
        });
    }
}
