//! # Stoa OpenAPI
//!
//! OpenAPI 3.1 document generation for the Stoa framework.
//!
//! Routes registered with a Stoa server self-describe their shape
//! through declarative schemas; this crate assembles that metadata,
//! plus the server's named schema registry, into a single OpenAPI 3.1
//! document on demand.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use http::Method;
//! use serde_json::json;
//! use stoa_core::{RouteRecord, RouteSchema, SchemaRegistry};
//! use stoa_openapi::{DocumentBase, Info, OpenApiConfig, OpenApiGenerator};
//!
//! let schemas = Arc::new(SchemaRegistry::new());
//! schemas.add_schema(json!({"$id": "widget", "type": "object"})).unwrap();
//!
//! let generator = OpenApiGenerator::new(
//!     OpenApiConfig::new(DocumentBase {
//!         info: Info {
//!             title: "Widget API".to_string(),
//!             version: "1.0.0".to_string(),
//!             ..Info::default()
//!         },
//!         ..DocumentBase::default()
//!     }),
//!     Arc::clone(&schemas),
//! );
//!
//! generator.on_route(RouteRecord::new(Method::GET, "/widgets/:id").schema(RouteSchema {
//!     response: Some([("200".to_string(), json!({"$ref": "widget"}))].into_iter().collect()),
//!     ..RouteSchema::default()
//! }));
//! generator.on_ready();
//!
//! let document = generator.document().unwrap();
//! assert!(document.paths.contains_key("/widgets/{id}"));
//! ```
//!
//! ## Pipeline
//!
//! - Route URL templates are translated from colon/regex/wildcard
//!   syntax to brace-templated paths ([`PathTranslator`])
//! - Bare schema identifiers become component references
//!   ([`update_references`])
//! - Location schemas become parameter objects ([`map_parameters`])
//! - `examples` annotations become named examples ([`map_examples`])
//! - Visibility policies decide which routes appear
//!   ([`should_route_hide`])

#![doc(html_root_url = "https://docs.rs/stoa-openapi/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod base;
mod document;
mod error;
mod examples;
mod generator;
mod operation;
mod parameters;
mod path;
mod references;
mod slug;
mod visibility;

pub use base::{prepare_base_document, DocumentBase};
pub use document::{
    Components, Contact, Document, Example, Info, License, MediaType, Operation, Parameter,
    ParameterIn, PathItem, RequestBody, Response, OPENAPI_VERSION,
};
pub use error::{OpenApiError, OpenApiResult};
pub use examples::map_examples;
pub use generator::{OpenApiConfig, OpenApiGenerator};
pub use operation::build_operation;
pub use parameters::map_parameters;
pub use path::PathTranslator;
pub use references::update_references;
pub use slug::Slugger;
pub use visibility::{should_route_hide, HideOptions};
