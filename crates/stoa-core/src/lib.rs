//! # Stoa Core
//!
//! Core route and schema types for the Stoa server framework.
//!
//! This crate provides the foundational types shared by Stoa subsystems:
//!
//! - [`RouteRecord`] - One registered HTTP route with its declarative schema
//! - [`RouteSchema`] - The declarative request/response contract of a route
//! - [`RouteConfig`] - Per-route configuration overrides
//! - [`SchemaKind`] - Structural classification of JSON schema values
//! - [`RouteRegistry`] - Append-only container of registered routes
//! - [`SchemaRegistry`] - Process-wide named schema store

#![doc(html_root_url = "https://docs.rs/stoa-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod registry;
mod route;
mod schema;

pub use error::{CoreError, CoreResult};
pub use registry::{RouteRegistry, SchemaRegistry};
pub use route::{RouteConfig, RouteRecord};
pub use schema::{RouteSchema, SchemaKind};
