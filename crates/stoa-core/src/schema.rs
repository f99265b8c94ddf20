//! Declarative route schemas and structural schema classification.
//!
//! Route contracts mix two levels of typing: the metadata fields a route
//! may declare (`summary`, `tags`, MIME types, ...) are plain struct
//! fields, while the per-location schema sub-trees (`querystring`,
//! `body`, ...) stay dynamic [`serde_json::Value`]s because they hold
//! arbitrary, recursively composable JSON Schema.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The declarative contract of one route.
///
/// Every field is optional; a route with no schema at all is still valid
/// and still appears in generated documents.
///
/// Schema sub-trees are read-only inputs to consumers: any rewriting step
/// must operate on an explicit `clone()` of the value, never on the
/// stored original.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteSchema {
    /// Unique string used to identify the operation in generated
    /// documents. Case-sensitive; must be unique document-wide.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,

    /// A short summary of what the operation does.
    pub summary: Option<String>,

    /// A verbose explanation of the operation behavior.
    pub description: Option<String>,

    /// Tags for logical grouping of operations.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Declares the operation deprecated.
    pub deprecated: Option<bool>,

    /// Additional external documentation.
    #[serde(rename = "externalDocs")]
    pub external_docs: Option<Value>,

    /// Security mechanisms that can be used for this operation.
    pub security: Option<Value>,

    /// MIME types accepted for the request body.
    ///
    /// Defaults to `["application/json"]` when unset.
    pub consumes: Option<Vec<String>>,

    /// MIME types produced for response bodies.
    ///
    /// Defaults to `["application/json"]` when unset.
    pub produces: Option<Vec<String>>,

    /// `true` to exclude this route from generated documents.
    #[serde(default)]
    pub hide: bool,

    /// Schema for query string parameters.
    pub querystring: Option<Value>,

    /// Schema for path parameters.
    pub params: Option<Value>,

    /// Schema for request headers.
    pub headers: Option<Value>,

    /// Schema for request cookies.
    pub cookies: Option<Value>,

    /// Schema for the request body.
    pub body: Option<Value>,

    /// Response schemas keyed by status code.
    pub response: Option<IndexMap<String, Value>>,
}

/// Structural classification of a JSON schema value.
///
/// Consumers classify each node once and dispatch via exhaustive `match`
/// instead of chaining shape predicates. Unknown constructs land in
/// [`SchemaKind::Unrecognized`] and are passed through unmodified rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// A reference node carrying a `$ref` target string.
    Reference,
    /// An array schema with an `items` sub-schema (single or tuple form).
    Array,
    /// An object schema with a `properties` map.
    Object,
    /// A union of alternatives (`anyOf`).
    Union,
    /// An intersection of constraints (`allOf`).
    Intersect,
    /// A primitive schema (`type` string, no nested structure to walk).
    Primitive,
    /// Anything else, including non-object values.
    Unrecognized,
}

impl SchemaKind {
    /// Classifies a schema value by its discriminating member.
    ///
    /// Discriminators are checked in a fixed order so that a node
    /// carrying several members (e.g. `$ref` plus annotations) has a
    /// single unambiguous kind.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Unrecognized;
        };
        if object.get("$ref").is_some_and(Value::is_string) {
            return Self::Reference;
        }
        if object.contains_key("items") {
            return Self::Array;
        }
        if object.get("properties").is_some_and(Value::is_object) {
            return Self::Object;
        }
        if object.get("anyOf").is_some_and(Value::is_array) {
            return Self::Union;
        }
        if object.get("allOf").is_some_and(Value::is_array) {
            return Self::Intersect;
        }
        if object.get("type").is_some_and(Value::is_string) {
            return Self::Primitive;
        }
        Self::Unrecognized
    }
}
