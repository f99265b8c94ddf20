//! Registered route records and per-route configuration.
//!
//! A [`RouteRecord`] captures everything a Stoa subsystem needs to know
//! about one registered HTTP route: its URL template in framework syntax
//! (colon parameters, regex segments, wildcards), the methods it answers,
//! and its optional declarative [`RouteSchema`].

use http::Method;
use serde::Deserialize;

use crate::schema::RouteSchema;

/// Per-route configuration overrides.
///
/// Route-level settings take precedence over the corresponding global
/// settings for that route.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    /// `true` to expose this route in generated documents even when it is
    /// a `HEAD` route and the global policy would drop it.
    #[serde(default)]
    pub expose_head_route: bool,

    /// `true` to exclude this route from generated documents.
    #[serde(default)]
    pub hide: bool,
}

/// One registered HTTP route.
///
/// Records are appended to a [`RouteRegistry`](crate::RouteRegistry)
/// during server setup and never mutated afterwards; consumers only
/// borrow them.
///
/// # Example
///
/// ```
/// use http::Method;
/// use stoa_core::{RouteRecord, RouteSchema};
///
/// let route = RouteRecord::new(Method::GET, "/users/:id")
///     .schema(RouteSchema {
///         summary: Some("Fetch one user".to_string()),
///         ..RouteSchema::default()
///     });
///
/// assert_eq!(route.url, "/users/:id");
/// assert_eq!(route.methods, vec![Method::GET]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// URL template in framework syntax (e.g. `/users/:id`).
    pub url: String,

    /// HTTP methods this route answers.
    pub methods: Vec<Method>,

    /// Declarative request/response contract, if any.
    pub schema: Option<RouteSchema>,

    /// Per-route configuration overrides, if any.
    pub config: Option<RouteConfig>,
}

impl RouteRecord {
    /// Creates a record for a single-method route.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            methods: vec![method],
            schema: None,
            config: None,
        }
    }

    /// Creates a record answering several methods on one URL template.
    #[must_use]
    pub fn with_methods(methods: Vec<Method>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            methods,
            schema: None,
            config: None,
        }
    }

    /// Attaches a declarative schema.
    #[must_use]
    pub fn schema(mut self, schema: RouteSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Attaches per-route configuration.
    #[must_use]
    pub fn config(mut self, config: RouteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether this record is a plain `HEAD` route.
    #[must_use]
    pub fn is_head(&self) -> bool {
        self.methods.len() == 1 && self.methods[0] == Method::HEAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_method_record() {
        let route = RouteRecord::new(Method::POST, "/widgets");
        assert_eq!(route.url, "/widgets");
        assert_eq!(route.methods, vec![Method::POST]);
        assert!(route.schema.is_none());
        assert!(route.config.is_none());
    }

    #[test]
    fn test_multi_method_record() {
        let route = RouteRecord::with_methods(vec![Method::GET, Method::PUT], "/widgets/:id");
        assert_eq!(route.methods.len(), 2);
        assert!(!route.is_head());
    }

    #[test]
    fn test_is_head() {
        assert!(RouteRecord::new(Method::HEAD, "/ping").is_head());
        assert!(!RouteRecord::new(Method::GET, "/ping").is_head());
        // A multi-method route containing HEAD is not a plain HEAD route.
        let route = RouteRecord::with_methods(vec![Method::HEAD, Method::GET], "/ping");
        assert!(!route.is_head());
    }

    #[test]
    fn test_route_config_deserialize() {
        let config: RouteConfig =
            serde_json::from_str(r#"{"exposeHeadRoute": true, "hide": false}"#).unwrap();
        assert!(config.expose_head_route);
        assert!(!config.hide);

        let config: RouteConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.expose_head_route);
        assert!(!config.hide);
    }
}
