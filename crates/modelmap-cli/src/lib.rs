//! CLI logic for the modelmap diagram tool.
//!
//! Resolves model and namespace names against the built-in demo namespaces,
//! builds the composition diagram, and writes DOT (and, with Graphviz
//! available, a rendered image) to the requested destination.

pub mod config;
pub mod error;

mod args;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::{debug, info};

use modelmap::{DiagramBuilder, Orientation, RootSource, export};
use modelmap_record::Namespace;
use modelmap_record::examples;

/// Run the modelmap CLI application
///
/// Resolves the requested names, discovers the composition graph, and writes
/// the output: DOT text to stdout, or - with `--out` - a `.dot` file next to
/// the rendered diagram.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Unknown model or namespace names
/// - Configuration loading errors
/// - Discovery errors (unknown roots, forward references)
/// - File I/O and rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    // Load configuration; command-line flags win over config values.
    let config = config::load_config(args.config.as_ref())?;
    let depth_limit = args.depth.unwrap_or(config.depth_limit);
    let orientation = if args.vertical {
        Orientation::Vertical
    } else {
        config.orientation
    };

    info!(
        models = args.models.join(", "),
        depth_limit = depth_limit,
        orientation:? = orientation;
        "Processing diagram"
    );

    let namespaces = examples::builtin_namespaces();
    let mut roots = Vec::new();
    for name in &args.models {
        roots.push(resolve_root(&namespaces, name)?);
    }

    let builder = DiagramBuilder::default()
        .with_depth_limit(depth_limit)
        .with_orientation(orientation);
    let diagram = builder.create(roots)?;
    let dot = export::to_dot(&diagram);

    match &args.out {
        Some(out) => {
            let dot_path = format!("{out}.dot");
            fs::write(&dot_path, &dot)?;
            debug!(path = dot_path; "Wrote DOT file");

            #[cfg(feature = "graphviz")]
            {
                export::render(&diagram, std::path::Path::new(out), format_for(out))?;
                info!(path = out; "Rendered diagram");
                println!("Rendered diagram to {out} and DOT to {dot_path}");
            }

            #[cfg(not(feature = "graphviz"))]
            println!("Wrote DOT to {dot_path}");
        }
        None => println!("{dot}"),
    }

    Ok(())
}

/// Resolve a command-line name to a discovery root: a namespace name expands
/// to a scan over its members, a qualified name selects one declaration.
fn resolve_root(namespaces: &[Namespace], name: &str) -> Result<RootSource, CliError> {
    if let Some(namespace) = namespaces.iter().find(|ns| ns.name() == name) {
        return Ok(RootSource::from(namespace));
    }

    if let Some((namespace_name, model_name)) = name.rsplit_once("::") {
        if let Some(namespace) = namespaces.iter().find(|ns| ns.name() == namespace_name) {
            if let Some(declaration) = namespace.get(model_name) {
                return Ok(RootSource::Model(declaration.clone()));
            }
        }
    }

    Err(CliError::ModelNotFound {
        name: name.to_string(),
    })
}

/// Pick the Graphviz output format from the output path's extension.
#[cfg(feature = "graphviz")]
fn format_for(out: &str) -> export::Format {
    match std::path::Path::new(out)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("png") => export::Format::Png,
        Some("pdf") => export::Format::Pdf,
        _ => export::Format::Svg,
    }
}
