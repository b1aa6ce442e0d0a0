//! CLI error type with miette diagnostics.
//!
//! Library errors pass through unmodified; the CLI only adds the failures of
//! its own thin layer (name lookup, configuration, file I/O) plus help text
//! for the errors users hit most.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use modelmap::DiagramError;
#[cfg(feature = "graphviz")]
use modelmap::export::ExportError;

use crate::config::ConfigError;

/// Errors surfaced by the modelmap CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    #[diagnostic(help(
        "fix the named declaration: bind forward references before diagramming \
         (Namespace::bind_forward_refs) and make sure every root is a declared model"
    ))]
    Diagram(#[from] DiagramError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("model or namespace {name:?} not found")]
    #[diagnostic(help(
        "pass a namespace name (e.g. `tavern`) or a qualified model name (e.g. `tavern::Party`)"
    ))]
    ModelNotFound { name: String },

    #[cfg(feature = "graphviz")]
    #[error(transparent)]
    #[diagnostic(help("rendering shells out to Graphviz; check that `dot` is installed"))]
    Export(#[from] ExportError),
}
