//! Framework adapter registry.
//!
//! The registry maps short framework identifiers to [`Framework`] adapters.
//! It is an explicitly constructed value: populate it during setup, then
//! share it immutably with any number of discovery calls. Lookups iterate in
//! registration order and the first framework whose predicate matches wins;
//! a type satisfying several frameworks' predicates resolves to the earliest
//! registration. That tie-break is deliberate and stable, not an error.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use log::debug;
use modelmap_core::types::TypeRef;
use modelmap_core::{DiagramError, Framework, ModelRef};
use modelmap_record::{FRAMEWORK_ID, RecordFramework};

/// Registration-ordered collection of framework adapters.
#[derive(Clone)]
pub struct AdapterRegistry {
    frameworks: IndexMap<String, Arc<dyn Framework>>,
}

impl AdapterRegistry {
    /// An empty registry. Use [`register`](Self::register) to populate it.
    pub fn new() -> Self {
        Self {
            frameworks: IndexMap::new(),
        }
    }

    /// A registry with the built-in frameworks registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(FRAMEWORK_ID, RecordFramework);
        registry
    }

    /// Register a framework under an identifier.
    ///
    /// Re-registering an identifier replaces the adapter but keeps its
    /// position in the lookup order.
    pub fn register(&mut self, id: impl Into<String>, framework: impl Framework + 'static) {
        let id = id.into();
        debug!(framework = id; "Registered framework adapter");
        self.frameworks.insert(id, Arc::new(framework));
    }

    /// Registered framework identifiers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.frameworks.keys().map(String::as_str)
    }

    /// The first registered framework whose predicate matches `raw`, if any.
    ///
    /// A `None` is the expected outcome for plain/scalar types encountered in
    /// field declarations; it is not an error.
    pub fn find(&self, raw: &TypeRef) -> Option<&dyn Framework> {
        self.frameworks
            .values()
            .find(|framework| framework.is_model_type(raw))
            .map(Arc::as_ref)
    }

    /// Adapt `raw` into a model.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownModelType`] when no registered
    /// framework recognizes `raw`, and propagates the framework's own
    /// [`DiagramError::InvalidModel`] when adaptation fails.
    pub fn adapt(&self, raw: &TypeRef) -> Result<ModelRef, DiagramError> {
        match self.find(raw) {
            Some(framework) => framework.adapt(raw),
            None => Err(DiagramError::UnknownModelType {
                type_name: raw.name().to_string(),
            }),
        }
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("frameworks", &self.frameworks.keys().collect::<Vec<_>>())
            .finish()
    }
}
