//! Record type declarations.
//!
//! A [`RecordType`] is the framework-native declaration of one data model: a
//! fully-qualified name, an optional description, and an ordered list of
//! [`RecordField`]s. Declarations are built through [`RecordTypeBuilder`] and
//! handed around as [`TypeRef`]s so the core can treat them opaquely.

use std::sync::Arc;

use modelmap_core::DiagramError;
use modelmap_core::types::{TypeExpr, TypeRef};

/// One declared data-model type of the record framework.
#[derive(Debug)]
pub struct RecordType {
    qualified_name: String,
    name: String,
    description: Option<String>,
    fields: Vec<RecordField>,
}

impl RecordType {
    /// Start building a declaration under a fully-qualified name such as
    /// `tavern::Party`. The display name is the last path segment.
    pub fn builder(qualified_name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            qualified_name: qualified_name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// The fully-qualified name the identity key derives from.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }
}

/// One named, typed field of a [`RecordType`].
#[derive(Debug)]
pub struct RecordField {
    name: String,
    type_expr: TypeExpr,
    description: Option<String>,
}

impl RecordField {
    /// Declare a field with its type expression.
    pub fn new(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr,
            description: None,
        }
    }

    /// Attach a description to the field.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type expression.
    pub fn type_expr(&self) -> &TypeExpr {
        &self.type_expr
    }

    /// The field's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Builder for [`RecordType`] declarations.
#[derive(Debug)]
pub struct RecordTypeBuilder {
    qualified_name: String,
    description: Option<String>,
    fields: Vec<RecordField>,
}

impl RecordTypeBuilder {
    /// Attach a description to the declaration.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field. Declaration order is preserved.
    pub fn field(mut self, field: RecordField) -> Self {
        self.fields.push(field);
        self
    }

    /// Finish the declaration and wrap it as an opaque [`TypeRef`].
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidField`] when two fields share a name;
    /// field names must be unique within their model.
    pub fn build(self) -> Result<TypeRef, DiagramError> {
        for (index, field) in self.fields.iter().enumerate() {
            if self.fields[..index].iter().any(|f| f.name() == field.name()) {
                return Err(DiagramError::InvalidField {
                    reason: format!(
                        "duplicate field {:?} in {}",
                        field.name(),
                        self.qualified_name
                    ),
                });
            }
        }

        let name = self
            .qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.qualified_name)
            .to_string();

        let record = RecordType {
            qualified_name: self.qualified_name,
            name: name.clone(),
            description: self.description,
            fields: self.fields,
        };
        Ok(TypeRef::new(name, Arc::new(record)))
    }
}

/// Marker for a plain, non-model type appearing in field declarations.
#[derive(Debug)]
pub struct Scalar {
    name: String,
}

impl Scalar {
    /// The scalar's rendered name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A bare type expression for a plain, non-model type such as `String`.
///
/// Scalars never match the record framework's predicate, so during discovery
/// they resolve to the expected-and-ignored negative registry lookup.
pub fn scalar(name: impl Into<String>) -> TypeExpr {
    let name = name.into();
    TypeExpr::named(TypeRef::new(
        name.clone(),
        Arc::new(Scalar { name }),
    ))
}
