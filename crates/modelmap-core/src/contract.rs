//! Capability contracts for data-modeling framework adapters.
//!
//! Three object-safe traits define what a framework must provide to
//! participate in diagramming:
//!
//! - [`Model`]: one adapted data-model type with an identity key and an
//!   ordered field list
//! - [`Field`]: one named, typed attribute of a model
//! - [`Framework`]: the registry-facing factory that recognizes and adapts
//!   raw type declarations
//!
//! The core never special-cases a framework by name; new frameworks are added
//! by registering another [`Framework`] implementation.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

use crate::{
    error::DiagramError,
    identifier::Id,
    label,
    types::{TypeExpr, TypeRef},
};

/// Model capability: one adapted data-model type.
///
/// Implementations wrap a framework-native declaration and expose it through
/// this uniform surface. A model's identity is its [`key`](Model::key),
/// derived from the fully-qualified type name; two models are the same model
/// iff their keys are equal.
pub trait Model: fmt::Debug + Send + Sync {
    /// Stable identity key derived from the fully-qualified type name.
    fn key(&self) -> Id;

    /// Display name of the model.
    fn name(&self) -> &str;

    /// Fields in declaration order.
    ///
    /// Implementations are expected to memoize the adapted field list so the
    /// same `FieldRef`s are returned on every call.
    fn fields(&self) -> &[FieldRef];

    /// Human-readable description, if the declaration carries one.
    fn description(&self) -> Option<&str>;

    /// Rendering label for this model's diagram node, as DOT HTML-like table
    /// markup. The default builds a field table; adapters can override it.
    fn dot_label(&self) -> String {
        label::table_label(self)
    }
}

/// Field capability: one named, typed attribute of a model.
pub trait Field: fmt::Debug + Send + Sync {
    /// Field name, unique within the owning model.
    fn name(&self) -> &str;

    /// The declared type expression.
    fn type_expr(&self) -> &TypeExpr;

    /// Rendered name of the declared type.
    fn type_name(&self) -> String {
        self.type_expr().to_string()
    }

    /// Human-readable description, if the declaration carries one.
    fn description(&self) -> Option<&str>;

    /// Whether the field holds a collection of the nested type rather than a
    /// single instance.
    fn is_many(&self) -> bool;

    /// Whether the field may be absent.
    fn is_nullable(&self) -> bool;
}

/// Framework capability: recognizes and adapts raw type declarations.
///
/// One implementation exists per supported data-modeling framework. The
/// registry consults [`is_model_type`](Framework::is_model_type) to test
/// candidates and [`adapt`](Framework::adapt) to produce models.
pub trait Framework: fmt::Debug + Send + Sync {
    /// Whether `raw` is a model type of this framework.
    fn is_model_type(&self, raw: &TypeRef) -> bool;

    /// Adapt `raw` into a [`Model`].
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidModel`] when `raw` does not satisfy
    /// this framework's contract.
    fn adapt(&self, raw: &TypeRef) -> Result<ModelRef, DiagramError>;
}

/// Shared handle to an adapted model.
///
/// Equality, hashing, and ordering all derive from the model's identity key,
/// which makes deduplication and canonical sorting independent of which
/// adapter instance produced the handle.
#[derive(Clone)]
pub struct ModelRef(Arc<dyn Model>);

impl ModelRef {
    /// Wrap an adapted model.
    pub fn new(model: impl Model + 'static) -> Self {
        Self(Arc::new(model))
    }
}

impl Deref for ModelRef {
    type Target = dyn Model;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ModelRef {}

impl Hash for ModelRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ModelRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModelRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Shared handle to an adapted field.
///
/// Fields belong to exactly one model; equality compares field names, which
/// is how edge validation matches a field against its source model's field
/// sequence.
#[derive(Clone)]
pub struct FieldRef(Arc<dyn Field>);

impl FieldRef {
    /// Wrap an adapted field.
    pub fn new(field: impl Field + 'static) -> Self {
        Self(Arc::new(field))
    }
}

impl Deref for FieldRef {
    type Target = dyn Field;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for FieldRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for FieldRef {}

impl Hash for FieldRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
