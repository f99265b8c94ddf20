//! Document generation and lifecycle.
//!
//! The generator is wired into the host server's lifecycle: every route
//! registration calls [`OpenApiGenerator::on_route`], the end of the
//! setup phase calls [`OpenApiGenerator::on_ready`], and from then on
//! [`OpenApiGenerator::document`] produces (and caches) the OpenAPI
//! document.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use stoa_core::{RouteRecord, RouteRegistry, SchemaRegistry};

use crate::base::{prepare_base_document, DocumentBase};
use crate::document::Document;
use crate::error::{OpenApiError, OpenApiResult};
use crate::operation::build_operation;
use crate::path::PathTranslator;
use crate::slug::Slugger;
use crate::visibility::{should_route_hide, HideOptions};

/// Suffix applied to a HEAD route's explicit `operationId` so it never
/// collides with the id of a sibling operation on the same path.
const HEAD_OPERATION_ID_SUFFIX: &str = "-head";

/// Generator configuration.
///
/// # Example
///
/// ```
/// use stoa_openapi::{DocumentBase, Info, OpenApiConfig};
///
/// let config = OpenApiConfig::new(DocumentBase {
///     info: Info {
///         title: "API".to_string(),
///         version: "1.0.0".to_string(),
///         ..Info::default()
///     },
///     ..DocumentBase::default()
/// })
/// .hide_untagged(true);
///
/// assert!(config.hide_untagged);
/// assert!(!config.expose_head_routes);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenApiConfig {
    /// Expose HEAD routes in the document. Defaults to `false`; a
    /// route-level override can still expose an individual route.
    pub expose_head_routes: bool,

    /// Exclude routes that declare no tags. Defaults to `false`.
    pub hide_untagged: bool,

    /// Sentinel tag excluding any route that carries it. Off by default.
    pub hidden_tag: Option<String>,

    /// User-supplied top-level document fields.
    pub openapi: DocumentBase,
}

impl OpenApiConfig {
    /// Creates a configuration around the given base document fields.
    #[must_use]
    pub fn new(openapi: DocumentBase) -> Self {
        Self {
            openapi,
            ..Self::default()
        }
    }

    /// Sets the global HEAD-route exposure policy.
    #[must_use]
    pub fn expose_head_routes(mut self, expose: bool) -> Self {
        self.expose_head_routes = expose;
        self
    }

    /// Sets the untagged-route hiding policy.
    #[must_use]
    pub fn hide_untagged(mut self, hide: bool) -> Self {
        self.hide_untagged = hide;
        self
    }

    /// Configures a sentinel tag that hides routes carrying it.
    #[must_use]
    pub fn hidden_tag(mut self, tag: impl Into<String>) -> Self {
        self.hidden_tag = Some(tag.into());
        self
    }
}

/// Build state of the cached document.
#[derive(Debug)]
enum DocumentState {
    /// Setup phase still running; the document may not be requested.
    NotReady,
    /// Ready but not yet requested.
    Unbuilt,
    /// Built and cached for the lifetime of the server instance.
    Built(Arc<Document>),
}

/// Produces the OpenAPI 3.1 document for one server instance.
///
/// Routes accumulate through [`on_route`](Self::on_route) during setup;
/// after [`on_ready`](Self::on_ready) the document can be requested any
/// number of times. The first request builds and caches it; the cached
/// document is immutable shared data, safe for concurrent readers.
#[derive(Debug)]
pub struct OpenApiGenerator {
    config: OpenApiConfig,
    schemas: Arc<SchemaRegistry>,
    routes: RwLock<RouteRegistry>,
    state: RwLock<DocumentState>,
}

impl OpenApiGenerator {
    /// Creates a generator sharing the host's schema registry.
    #[must_use]
    pub fn new(config: OpenApiConfig, schemas: Arc<SchemaRegistry>) -> Self {
        Self {
            config,
            schemas,
            routes: RwLock::new(RouteRegistry::new()),
            state: RwLock::new(DocumentState::NotReady),
        }
    }

    /// Route registration hook; fires once per registered route.
    ///
    /// HEAD routes are dropped unless either the global policy or the
    /// route's own configuration exposes them; routes hidden by their
    /// configuration are dropped outright. A HEAD route with an explicit
    /// `operationId` is recorded with the id suffixed `-head`, because
    /// two operations on one path cannot share an id in a valid
    /// document.
    pub fn on_route(&self, route: RouteRecord) {
        let config = route.config.clone().unwrap_or_default();
        if route.is_head() && !self.config.expose_head_routes && !config.expose_head_route {
            tracing::debug!("Skipping HEAD route {} (not exposed)", route.url);
            return;
        }
        if config.hide {
            tracing::debug!("Skipping hidden route {}", route.url);
            return;
        }
        let mut route = route;
        if route.is_head() {
            if let Some(id) = route
                .schema
                .as_mut()
                .and_then(|schema| schema.operation_id.as_mut())
            {
                id.push_str(HEAD_OPERATION_ID_SUFFIX);
            }
        }
        self.routes.write().push(route);
    }

    /// Readiness hook; ends the registration phase.
    pub fn on_ready(&self) {
        let mut state = self.state.write();
        if matches!(*state, DocumentState::NotReady) {
            *state = DocumentState::Unbuilt;
        }
    }

    /// Produces the OpenAPI document, building it on first call and
    /// returning the cached copy afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`OpenApiError::DocumentNotReady`] when called before
    /// [`on_ready`](Self::on_ready).
    pub fn document(&self) -> OpenApiResult<Arc<Document>> {
        {
            let state = self.state.read();
            match &*state {
                DocumentState::NotReady => return Err(OpenApiError::DocumentNotReady),
                DocumentState::Built(document) => return Ok(Arc::clone(document)),
                DocumentState::Unbuilt => {}
            }
        }
        let mut state = self.state.write();
        // Another caller may have finished the build while we waited for
        // the write lock.
        match &*state {
            DocumentState::NotReady => Err(OpenApiError::DocumentNotReady),
            DocumentState::Built(document) => Ok(Arc::clone(document)),
            DocumentState::Unbuilt => {
                let document = Arc::new(self.build());
                *state = DocumentState::Built(Arc::clone(&document));
                Ok(document)
            }
        }
    }

    /// Assembles the document from the current registries.
    fn build(&self) -> Document {
        let routes = self.routes.read();
        tracing::debug!("Building OpenAPI document from {} routes", routes.len());
        let mut document = prepare_base_document(&self.schemas, &self.config.openapi);
        let hide_options = HideOptions {
            hide_untagged: self.config.hide_untagged,
            hidden_tag: self.config.hidden_tag.clone(),
        };
        let mut slugger = Slugger::new();
        let mut translator = PathTranslator::new();
        for route in routes.iter() {
            if should_route_hide(route.schema.as_ref(), &hide_options) {
                tracing::debug!("Hiding route {} from document", route.url);
                continue;
            }
            let url = translator.translate(&route.url);
            let operation = build_operation(route.schema.as_ref(), &mut slugger);
            let entry = document.paths.entry(url).or_default();
            for method in &route.methods {
                if !entry.insert(method, operation.clone()) {
                    tracing::debug!("Ignoring method {} on {} in document", method, route.url);
                }
            }
        }
        document
    }
}
