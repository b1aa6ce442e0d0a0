//! Modelmap - composition diagrams for data-model declarations.
//!
//! Given one or more root model types, modelmap discovers every component
//! model reachable through field type declarations and assembles the result
//! into a canonical, deterministic [`Diagram`] ready for DOT rendering.
//!
//! Frameworks plug in through the capability contracts in
//! [`modelmap_core::contract`]; the built-in record framework lives in
//! [`modelmap_record`].

pub mod export;
pub mod registry;

mod graph;
mod resolve;

pub use modelmap_core::{contract, diagram, error, identifier, label, types};
pub use modelmap_core::{
    Cardinality, Diagram, DiagramError, Edge, Field, FieldRef, Framework, Modality, Model,
    ModelRef, Orientation,
};

pub use graph::{Discovery, RootSource, discover};
pub use registry::AdapterRegistry;
pub use resolve::{ResolveError, candidate_args};

use log::{debug, info};

/// Default depth limit: only direct component models are expanded.
pub const DEFAULT_DEPTH_LIMIT: usize = 1;

/// Configurable entry point for building composition diagrams.
///
/// # Examples
///
/// ```
/// use modelmap::{DiagramBuilder, RootSource};
/// use modelmap_record::examples;
///
/// let tavern = examples::tavern();
/// let party = tavern.get("Party").expect("declared").clone();
///
/// let diagram = DiagramBuilder::default()
///     .with_depth_limit(2)
///     .create([RootSource::Model(party)])
///     .expect("diagrammable");
///
/// assert_eq!(diagram.name(), "Party");
/// ```
#[derive(Debug)]
pub struct DiagramBuilder {
    registry: AdapterRegistry,
    depth_limit: usize,
    orientation: Orientation,
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new(AdapterRegistry::with_builtins())
    }
}

impl DiagramBuilder {
    /// Create a builder over an explicitly constructed registry.
    pub fn new(registry: AdapterRegistry) -> Self {
        Self {
            registry,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            orientation: Orientation::default(),
        }
    }

    /// How deep to search for component models. Depth 0 records only the
    /// roots.
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Layout direction passed through to the renderer.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The registry this builder consults.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Discover the composition graph under `roots` and assemble the
    /// canonical diagram. The diagram is named after the first root model.
    ///
    /// # Errors
    ///
    /// Propagates every [`DiagramError`] from discovery unmodified; see
    /// [`discover`].
    pub fn create(
        &self,
        roots: impl IntoIterator<Item = RootSource>,
    ) -> Result<Diagram, DiagramError> {
        let roots: Vec<RootSource> = roots.into_iter().collect();
        info!(
            root_count = roots.len(),
            depth_limit = self.depth_limit;
            "Discovering composition graph"
        );

        let discovery = discover(&self.registry, &roots, self.depth_limit)?;
        debug!(
            model_count = discovery.models.len(),
            edge_count = discovery.edges.len();
            "Discovery complete"
        );

        let name = discovery.root_models[0].name().to_string();
        Ok(Diagram::new(
            name,
            self.orientation,
            discovery.models,
            discovery.edges,
        ))
    }
}

/// Build a composition diagram with the built-in frameworks.
///
/// This is the one-call form of [`DiagramBuilder`].
///
/// # Errors
///
/// Propagates every [`DiagramError`] from discovery unmodified.
pub fn create(
    roots: impl IntoIterator<Item = RootSource>,
    depth_limit: usize,
    orientation: Orientation,
) -> Result<Diagram, DiagramError> {
    DiagramBuilder::default()
        .with_depth_limit(depth_limit)
        .with_orientation(orientation)
        .create(roots)
}
