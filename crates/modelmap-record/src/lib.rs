//! Record-descriptor data-modeling framework for modelmap.
//!
//! This crate is a complete, self-contained data-modeling framework plus the
//! adapter pair that plugs it into the modelmap core contracts:
//!
//! - **Declarations**: [`descriptor::RecordType`] / [`descriptor::RecordField`]
//!   declare models at runtime through a builder API
//! - **Namespaces**: [`namespace::Namespace`] groups declarations, supports
//!   root scanning, and binds forward references
//! - **Adapters**: [`adapter::RecordModel`], [`adapter::RecordFieldAdapter`],
//!   and [`adapter::RecordFramework`] implement the core capability contracts
//! - **Demo models**: [`examples`] ships ready-made namespaces for tests and
//!   the CLI
//!
//! Other frameworks participate the same way: implement the contracts in
//! `modelmap_core::contract` and register the framework with the adapter
//! registry.

pub mod adapter;
pub mod descriptor;
pub mod examples;
pub mod namespace;

pub use adapter::{FRAMEWORK_ID, RecordFramework, RecordModel};
pub use descriptor::{RecordField, RecordType, scalar};
pub use namespace::Namespace;
