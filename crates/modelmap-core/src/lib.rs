//! Modelmap Core Types and Definitions
//!
//! This crate provides the foundational types for modelmap composition
//! diagrams. It includes:
//!
//! - **Identifiers**: Interned model identity keys ([`identifier::Id`])
//! - **Contracts**: The Model / Field / Framework capability traits that
//!   framework adapters implement ([`contract`] module)
//! - **Types**: Declared type expressions and opaque framework type handles
//!   ([`types`] module)
//! - **Diagram**: Composition edges and the canonical diagram snapshot
//!   ([`diagram`] module)
//! - **Labels**: DOT HTML-like table labels for model nodes ([`label`]
//!   module)
//! - **Errors**: The diagram error taxonomy ([`error::DiagramError`])

pub mod contract;
pub mod diagram;
pub mod error;
pub mod identifier;
pub mod label;
pub mod types;

pub use contract::{Field, FieldRef, Framework, Model, ModelRef};
pub use diagram::{Cardinality, Diagram, Edge, Modality, Orientation};
pub use error::DiagramError;
