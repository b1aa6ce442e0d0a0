//! Export of diagrams into external formats.
//!
//! DOT text generation is always available; rendering through the installed
//! Graphviz `dot` binary is behind the `graphviz` feature.

pub mod dot;

use thiserror::Error;

pub use dot::{to_dot, to_graph};

#[cfg(feature = "graphviz")]
pub use dot::render;
#[cfg(feature = "graphviz")]
pub use graphviz_rust::cmd::Format;

/// Errors produced while exporting a diagram.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Running the Graphviz layout engine failed.
    #[error("graphviz execution failed: {0}")]
    Graphviz(#[from] std::io::Error),
}
