//! Command-line argument definitions for the modelmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the models to diagram and control output
//! paths, search depth, layout direction, configuration file selection, and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the modelmap diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Names of models or namespaces to diagram
    #[arg(
        required = true,
        help = "Qualified model names (e.g. tavern::Party) or namespace names (e.g. tavern). \
                Only the roots of composition trees are needed; component models are discovered."
    )]
    pub models: Vec<String>,

    /// Output path for the rendered diagram; DOT text goes to stdout when omitted
    #[arg(short, long)]
    pub out: Option<String>,

    /// How deep to search for component models
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Draw the diagram top-to-bottom instead of left-to-right
    #[arg(short, long)]
    pub vertical: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
