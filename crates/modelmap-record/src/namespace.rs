//! Declaration namespaces.
//!
//! A [`Namespace`] is the module analog for the record framework: an ordered
//! table of declarations that can be scanned for root models and that knows
//! how to bind the forward references its members' field types carry.

use indexmap::IndexMap;
use log::debug;
use modelmap_core::types::{TypeExpr, TypeRef};

use crate::descriptor::RecordType;

/// An ordered declaration table, keyed by the declarations' display names.
///
/// Declaring a name that already exists replaces the previous declaration,
/// keeping its position; later forward-reference binding resolves against the
/// replacement.
#[derive(Debug, Default)]
pub struct Namespace {
    name: String,
    entries: IndexMap<String, TypeRef>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// The namespace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a declaration, returning a handle for use in other declarations'
    /// field types.
    pub fn declare(&mut self, declaration: TypeRef) -> TypeRef {
        self.entries
            .insert(declaration.name().to_string(), declaration.clone());
        declaration
    }

    /// Look up a declaration by display name.
    pub fn get(&self, name: &str) -> Option<&TypeRef> {
        self.entries.get(name)
    }

    /// Iterate declarations in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &TypeRef> {
        self.entries.values()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the namespace has no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind every unbound forward reference in member field types to the
    /// declaration of the referenced name.
    ///
    /// References are matched by display name first, then by fully-qualified
    /// name. Names with no matching declaration are left unbound so that
    /// discovery reports them as unevaluated forward references.
    pub fn bind_forward_refs(&self) {
        for member in self.entries.values() {
            let Some(record) = member.downcast_ref::<RecordType>() else {
                continue;
            };
            for field in record.fields() {
                field.type_expr().visit(&mut |expr| {
                    if let TypeExpr::Forward(forward) = expr {
                        if forward.is_bound() {
                            return;
                        }
                        match self.lookup(forward.name()) {
                            Some(target) => {
                                forward.bind(target.clone());
                                debug!(
                                    namespace = self.name,
                                    reference = forward.name();
                                    "Bound forward reference"
                                );
                            }
                            None => debug!(
                                namespace = self.name,
                                reference = forward.name();
                                "Forward reference has no matching declaration"
                            ),
                        }
                    }
                });
            }
        }
    }

    fn lookup(&self, reference: &str) -> Option<&TypeRef> {
        if let Some(declaration) = self.entries.get(reference) {
            return Some(declaration);
        }
        self.entries.values().find(|declaration| {
            declaration
                .downcast_ref::<RecordType>()
                .is_some_and(|record| record.qualified_name() == reference)
        })
    }
}
