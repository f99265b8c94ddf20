//! Base document preparation.
//!
//! The base document is everything except `paths`: the user-supplied
//! top-level fields merged with the schema registry's contents under
//! `components.schemas`.

use serde::Deserialize;
use serde_json::Value;
use stoa_core::SchemaRegistry;

use crate::document::{Components, Document, Info, OPENAPI_VERSION};
use crate::references::update_references;

/// User-supplied top-level document fields.
///
/// Only `info` is required. `components.schemas` may be supplied
/// explicitly; otherwise it is filled from the schema registry at build
/// time. The remaining fields pass through into the document unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentBase {
    /// API metadata (required by OpenAPI).
    pub info: Info,
    /// Reusable components.
    pub components: Option<Components>,
    /// Additional external documentation.
    #[serde(rename = "externalDocs")]
    pub external_docs: Option<Value>,
    /// Default `$schema` dialect for contained schema objects.
    #[serde(rename = "jsonSchemaDialect")]
    pub json_schema_dialect: Option<String>,
    /// Document-wide security requirements.
    pub security: Option<Value>,
    /// Available servers.
    pub servers: Option<Value>,
    /// Tags used by the document.
    pub tags: Option<Value>,
    /// Incoming webhooks.
    pub webhooks: Option<Value>,
}

/// Builds the document skeleton, before any path is attached.
///
/// `components.schemas` defaults to a deep copy of the registry's
/// current contents. Every entry is stripped of its `$id` member (the
/// map key already carries the identifier, and an embedded
/// self-identifier is invalid in this position) and has its references
/// rewritten. The `openapi` field is always [`OPENAPI_VERSION`].
#[must_use]
pub fn prepare_base_document(registry: &SchemaRegistry, base: &DocumentBase) -> Document {
    let mut components = base.components.clone().unwrap_or_default();
    let schemas = components.schemas.get_or_insert_with(|| registry.schemas());
    for schema in schemas.values_mut() {
        if let Some(object) = schema.as_object_mut() {
            object.remove("$id");
        }
        update_references(schema);
    }
    Document {
        openapi: OPENAPI_VERSION.to_string(),
        info: base.info.clone(),
        json_schema_dialect: base.json_schema_dialect.clone(),
        servers: base.servers.clone(),
        paths: indexmap::IndexMap::new(),
        webhooks: base.webhooks.clone(),
        components: Some(components),
        security: base.security.clone(),
        tags: base.tags.clone(),
        external_docs: base.external_docs.clone(),
    }
}
