//! Error taxonomy for diagram construction.
//!
//! Every failure surfaced by discovery or diagram assembly is a
//! [`DiagramError`]. None of these conditions are transient, so callers are
//! expected to report them and fix the offending declaration rather than
//! retry.

use thiserror::Error;

/// Errors raised while adapting model declarations and building diagrams.
///
/// The forward-reference variants are distinct on purpose: an unresolved
/// string annotation and an unbound named reference require different fixes,
/// and both carry the model and field of the declaration that needs
/// attention.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// A root type did not match any registered framework adapter.
    ///
    /// During field-candidate resolution the same condition is a negative
    /// registry lookup, not an error; only roots are required to be
    /// diagrammable.
    #[error("unknown model type: {type_name} does not match any registered framework adapter")]
    UnknownModelType { type_name: String },

    /// An edge was constructed with a field that does not belong to its
    /// source model. Internal-consistency guard.
    #[error("{field:?} is not a field of model {model}")]
    UnknownField { model: String, field: String },

    /// A field's declared type is a raw string annotation that was never
    /// parsed into a type expression.
    #[error("field {model}.{field} is declared with the unresolved string annotation {raw:?}")]
    StringForwardRef {
        model: String,
        field: String,
        raw: String,
    },

    /// A field's declared type names a forward reference that has not been
    /// bound to a declaration yet.
    #[error("field {model}.{field} refers to {reference:?} before it is bound to a declaration")]
    UnevaluatedForwardRef {
        model: String,
        field: String,
        reference: String,
    },

    /// An adapter was constructed from a declaration that does not satisfy
    /// its framework's contract.
    #[error("{type_name} is not a valid model for this adapter: {reason}")]
    InvalidModel { type_name: String, reason: String },

    /// A field declaration violates its framework's contract.
    #[error("invalid field: {reason}")]
    InvalidField { reason: String },

    /// Discovery was invoked without any diagrammable root model.
    #[error("no root models were supplied")]
    NoRootModels,
}
