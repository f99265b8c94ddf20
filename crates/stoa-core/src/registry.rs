//! Route and schema registries.
//!
//! Both registries are owned containers scoped to one server instance:
//! the [`RouteRegistry`] accumulates route records during setup, the
//! [`SchemaRegistry`] holds named schemas shared across routes. Neither
//! is a free-floating global.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::route::RouteRecord;

/// Append-only container of registered routes.
///
/// Records are appended in registration order during server setup and
/// only iterated afterwards; nothing is ever removed or mutated.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteRecord>,
}

impl RouteRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route record.
    pub fn push(&mut self, route: RouteRecord) {
        self.routes.push(route);
    }

    /// Iterates records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteRecord> {
        self.routes.iter()
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Process-wide named schema store.
///
/// Schemas are registered with a string `$id` member which becomes their
/// key; the stored value keeps the `$id` untouched. Queries return deep
/// copies so callers can never mutate the registered originals.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use stoa_core::SchemaRegistry;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .add_schema(json!({"$id": "user", "type": "object"}))
///     .unwrap();
///
/// assert!(registry.get("user").is_some());
/// assert_eq!(registry.schemas().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<IndexMap<String, Value>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its `$id` member.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingSchemaId`] when the schema has no
    /// string `$id` member, and [`CoreError::DuplicateSchemaId`] when
    /// the identifier is already taken.
    pub fn add_schema(&self, schema: Value) -> CoreResult<()> {
        let id = schema
            .get("$id")
            .and_then(Value::as_str)
            .ok_or(CoreError::MissingSchemaId)?
            .to_string();
        let mut schemas = self.schemas.write();
        if schemas.contains_key(&id) {
            return Err(CoreError::DuplicateSchemaId { id });
        }
        schemas.insert(id, schema);
        Ok(())
    }

    /// Returns a deep copy of the current identifier → schema map.
    #[must_use]
    pub fn schemas(&self) -> IndexMap<String, Value> {
        self.schemas.read().clone()
    }

    /// Returns a deep copy of one schema, if registered.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Value> {
        self.schemas.read().get(id).cloned()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}
