//! Adapter pair plugging record declarations into the core contracts.
//!
//! [`RecordModel`] and [`RecordFieldAdapter`] implement the `Model` and
//! `Field` capabilities over [`RecordType`] declarations; [`RecordFramework`]
//! is the registry-facing factory. The is-many and is-nullable predicates are
//! derived from the declared type expression: an outermost optional wrapper
//! makes a field nullable, a container (after stripping optional layers)
//! makes it many-valued.

use std::sync::{Arc, OnceLock};

use modelmap_core::types::{TypeExpr, TypeRef};
use modelmap_core::{DiagramError, Field, FieldRef, Framework, Model, ModelRef};
use modelmap_core::identifier::Id;

use crate::descriptor::RecordType;

/// Identifier under which the record framework registers itself.
pub const FRAMEWORK_ID: &str = "record";

/// Model adapter over a [`RecordType`] declaration.
#[derive(Debug)]
pub struct RecordModel {
    record: Arc<RecordType>,
    key: Id,
    fields: OnceLock<Vec<FieldRef>>,
}

impl RecordModel {
    /// Adapt a raw type handle.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidModel`] when `raw` does not wrap a
    /// record declaration.
    pub fn new(raw: &TypeRef) -> Result<Self, DiagramError> {
        let record: Arc<RecordType> =
            raw.downcast().ok_or_else(|| DiagramError::InvalidModel {
                type_name: raw.name().to_string(),
                reason: "not a record type declaration".to_string(),
            })?;

        Ok(Self {
            key: Id::new(record.qualified_name()),
            record,
            fields: OnceLock::new(),
        })
    }
}

impl Model for RecordModel {
    fn key(&self) -> Id {
        self.key
    }

    fn name(&self) -> &str {
        self.record.name()
    }

    fn fields(&self) -> &[FieldRef] {
        self.fields.get_or_init(|| {
            (0..self.record.fields().len())
                .map(|index| {
                    FieldRef::new(RecordFieldAdapter {
                        record: Arc::clone(&self.record),
                        index,
                    })
                })
                .collect()
        })
    }

    fn description(&self) -> Option<&str> {
        self.record.description()
    }
}

/// Field adapter over one field of a [`RecordType`].
#[derive(Debug)]
pub struct RecordFieldAdapter {
    record: Arc<RecordType>,
    index: usize,
}

impl Field for RecordFieldAdapter {
    fn name(&self) -> &str {
        self.record.fields()[self.index].name()
    }

    fn type_expr(&self) -> &TypeExpr {
        self.record.fields()[self.index].type_expr()
    }

    fn description(&self) -> Option<&str> {
        self.record.fields()[self.index].description()
    }

    fn is_many(&self) -> bool {
        matches!(self.type_expr().strip_optional(), TypeExpr::Container(..))
    }

    fn is_nullable(&self) -> bool {
        self.type_expr().is_optional()
    }
}

/// Registry-facing adapter factory for the record framework.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordFramework;

impl Framework for RecordFramework {
    fn is_model_type(&self, raw: &TypeRef) -> bool {
        raw.downcast_ref::<RecordType>().is_some()
    }

    fn adapt(&self, raw: &TypeRef) -> Result<ModelRef, DiagramError> {
        Ok(ModelRef::new(RecordModel::new(raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{RecordField, scalar};

    fn quest() -> TypeRef {
        RecordType::builder("tavern::Quest")
            .description("A task to complete, with a reward attached.")
            .field(RecordField::new("name", scalar("String")))
            .field(
                RecordField::new("reward_gold", scalar("u32"))
                    .with_description("Gold awarded on completion"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_adapts_record_declarations() {
        let model = RecordModel::new(&quest()).unwrap();

        assert_eq!(model.name(), "Quest");
        assert_eq!(model.key(), Id::new("tavern::Quest"));
        assert_eq!(
            model.description(),
            Some("A task to complete, with a reward attached.")
        );

        let fields = model.fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name(), "name");
        assert_eq!(fields[1].description(), Some("Gold awarded on completion"));
    }

    #[test]
    fn test_field_list_is_memoized() {
        let model = RecordModel::new(&quest()).unwrap();

        let first = model.fields().as_ptr();
        let second = model.fields().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_record_handles() {
        let not_a_record = TypeRef::new("String", Arc::new("just a string".to_string()));

        assert!(!RecordFramework.is_model_type(&not_a_record));
        let err = RecordModel::new(&not_a_record).unwrap_err();
        assert!(matches!(
            err,
            DiagramError::InvalidModel { ref type_name, .. } if type_name == "String"
        ));
    }

    #[test]
    fn test_predicates_derive_from_type_expressions() {
        let adventurer = RecordType::builder("tavern::Adventurer").build().unwrap();
        let decl = RecordType::builder("tavern::Party")
            .field(RecordField::new(
                "members",
                TypeExpr::list(TypeExpr::named(adventurer.clone())),
            ))
            .field(RecordField::new(
                "reserve_members",
                TypeExpr::optional(TypeExpr::list(TypeExpr::named(adventurer.clone()))),
            ))
            .field(RecordField::new(
                "active_quest",
                TypeExpr::optional(scalar("Quest")),
            ))
            .field(RecordField::new("name", scalar("String")))
            .build()
            .unwrap();

        let model = RecordModel::new(&decl).unwrap();
        let fields = model.fields();

        // members: Vec<Adventurer>
        assert!(fields[0].is_many());
        assert!(!fields[0].is_nullable());
        // reserve_members: Option<Vec<Adventurer>>
        assert!(fields[1].is_many());
        assert!(fields[1].is_nullable());
        // active_quest: Option<Quest>
        assert!(!fields[2].is_many());
        assert!(fields[2].is_nullable());
        // name: String
        assert!(!fields[3].is_many());
        assert!(!fields[3].is_nullable());
    }

    #[test]
    fn test_framework_adapt_produces_equal_models_for_same_declaration() {
        let decl = quest();
        let a = RecordFramework.adapt(&decl).unwrap();
        let b = RecordFramework.adapt(&decl).unwrap();

        assert_eq!(a, b);
    }
}
