//! OpenAPI 3.1 document model.
//!
//! Typed structs for the parts of the document this crate assembles,
//! following the OpenAPI 3.1 specification:
//! <https://spec.openapis.org/oas/v3.1.0>
//!
//! Schema values stay dynamic [`serde_json::Value`]s throughout: they
//! originate from user-declared JSON Schema and only pass through the
//! reference-rewriting step, so there is nothing to gain from modelling
//! their interior. Top-level fields the pipeline merely passes through
//! (`servers`, `tags`, `security`, `webhooks`) are kept dynamic for the
//! same reason.

use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OpenApiResult;

/// The OpenAPI version emitted by this crate.
pub const OPENAPI_VERSION: &str = "3.1.0";

/// OpenAPI document root object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// OpenAPI version, always [`OPENAPI_VERSION`].
    pub openapi: String,
    /// API metadata.
    pub info: Info,
    /// Default `$schema` dialect for contained schema objects.
    #[serde(rename = "jsonSchemaDialect")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema_dialect: Option<String>,
    /// Available servers (passthrough).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,
    /// API paths and operations, keyed by brace-templated URL.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Incoming webhooks (passthrough).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Value>,
    /// Reusable components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Document-wide security requirements (passthrough).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,
    /// Tags used by the document (passthrough).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    /// Additional external documentation (passthrough).
    #[serde(rename = "externalDocs")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,
}

impl Document {
    /// Serializes the document to a compact JSON string.
    pub fn to_json_string(&self) -> OpenApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document to a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> OpenApiResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// API metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// API description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Terms of service URL.
    #[serde(rename = "termsOfService")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// Contact information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct License {
    /// License name.
    pub name: String,
    /// License URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// SPDX identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Reusable components.
///
/// Only `schemas` is assembled by this crate; the remaining members pass
/// through from the user-supplied base document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Reusable schemas, keyed by identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, Value>>,
    /// Reusable responses (passthrough).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Value>,
    /// Reusable parameters (passthrough).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    /// Security schemes (passthrough).
    #[serde(rename = "securitySchemes")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<Value>,
}

/// A path item containing operations for a single path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItem {
    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Slots an operation under the given HTTP method.
    ///
    /// Returns `false` when the method has no place in a path item
    /// (extension methods, `TRACE`); such operations are ignored.
    pub fn insert(&mut self, method: &Method, operation: Operation) -> bool {
        match method.as_str() {
            "GET" => self.get = Some(operation),
            "PUT" => self.put = Some(operation),
            "POST" => self.post = Some(operation),
            "DELETE" => self.delete = Some(operation),
            "OPTIONS" => self.options = Some(operation),
            "HEAD" => self.head = Some(operation),
            "PATCH" => self.patch = Some(operation),
            _ => return false,
        }
        true
    }

    /// Returns the operation registered for a method, if any.
    #[must_use]
    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        match method.as_str() {
            "GET" => self.get.as_ref(),
            "PUT" => self.put.as_ref(),
            "POST" => self.post.as_ref(),
            "DELETE" => self.delete.as_ref(),
            "OPTIONS" => self.options.as_ref(),
            "HEAD" => self.head.as_ref(),
            "PATCH" => self.patch.as_ref(),
            _ => None,
        }
    }
}

/// An API operation (one HTTP method on one path).
///
/// Every field is optional or empty-skipping so a schema-less route
/// serializes as an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Tags for grouping.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Full description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation (passthrough).
    #[serde(rename = "externalDocs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,
    /// Whether deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Security requirements (passthrough).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,
    /// Parameters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Request body.
    #[serde(rename = "requestBody")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Query string parameter.
    Query,
    /// URL path parameter.
    Path,
    /// HTTP header.
    Header,
    /// Cookie.
    Cookie,
}

/// An operation parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterIn,
    /// Whether required.
    pub required: bool,
    /// Whether deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Named examples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Example>>,
    /// Whether array/object values expand into separate parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    /// Parameter schema.
    pub schema: Value,
}

/// A named example value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// Example description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The example value itself.
    pub value: Value,
}

/// Request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Content by media type.
    pub content: IndexMap<String, MediaType>,
}

/// Media type content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type.
    pub schema: Value,
}

/// Response definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Human-readable description (required by the specification).
    pub description: String,
    /// Response content by media type.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}
