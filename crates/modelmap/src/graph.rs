//! Composition-graph discovery.
//!
//! Starting from one or more root models, walk field type declarations to
//! find every reachable component model and the edges connecting them. The
//! traversal uses an explicit FIFO worklist with seen-sets owned by the call:
//! the seen-model set is the cycle/revisit guard, the seen-edge set collapses
//! repeated (source, field, target) triples, and the depth limit bounds how
//! far composition trees are expanded regardless of graph density.

use std::collections::VecDeque;

use indexmap::IndexSet;
use log::trace;
use modelmap_core::types::TypeRef;
use modelmap_core::{DiagramError, Edge, FieldRef, ModelRef};
use modelmap_record::Namespace;

use crate::registry::AdapterRegistry;
use crate::resolve::{self, ResolveError};

/// One root of a discovery call.
#[derive(Debug)]
pub enum RootSource {
    /// A single type that must adapt to a model; failing to adapt is fatal.
    Model(TypeRef),
    /// A collection of types to filter through the registry; members no
    /// framework recognizes are skipped.
    Scan(Vec<TypeRef>),
}

impl From<TypeRef> for RootSource {
    fn from(raw: TypeRef) -> Self {
        RootSource::Model(raw)
    }
}

impl From<&Namespace> for RootSource {
    fn from(namespace: &Namespace) -> Self {
        RootSource::Scan(namespace.members().cloned().collect())
    }
}

/// Raw discovery output, in traversal order.
///
/// `root_models` preserves the order roots were supplied in; the first entry
/// names the diagram. `models` and `edges` are deduplicated but unsorted;
/// canonical ordering happens in diagram assembly.
#[derive(Debug)]
pub struct Discovery {
    pub root_models: Vec<ModelRef>,
    pub models: Vec<ModelRef>,
    pub edges: Vec<Edge>,
}

/// Discover the composition graph reachable from `roots`.
///
/// Each discovered model is expanded at most once. A model first recorded at
/// the depth limit keeps its node but not its outgoing edges.
///
/// # Errors
///
/// - [`DiagramError::UnknownModelType`] when a [`RootSource::Model`] root
///   matches no registered framework (for field candidates the same
///   condition is a skip, not an error)
/// - [`DiagramError::StringForwardRef`] / [`DiagramError::UnevaluatedForwardRef`]
///   when a field's declared type cannot be resolved; these abort the whole
///   discovery
/// - [`DiagramError::NoRootModels`] when no diagrammable root remains after
///   scanning
pub fn discover(
    registry: &AdapterRegistry,
    roots: &[RootSource],
    depth_limit: usize,
) -> Result<Discovery, DiagramError> {
    let mut root_models = Vec::new();
    for root in roots {
        match root {
            RootSource::Model(raw) => root_models.push(registry.adapt(raw)?),
            RootSource::Scan(members) => {
                for raw in members {
                    if registry.find(raw).is_some() {
                        root_models.push(registry.adapt(raw)?);
                    }
                }
            }
        }
    }
    if root_models.is_empty() {
        return Err(DiagramError::NoRootModels);
    }

    let mut seen_models: IndexSet<ModelRef> = IndexSet::new();
    let mut seen_edges: IndexSet<Edge> = IndexSet::new();
    let mut worklist: VecDeque<(ModelRef, usize)> = root_models
        .iter()
        .cloned()
        .map(|model| (model, 0))
        .collect();

    while let Some((model, depth)) = worklist.pop_front() {
        if !seen_models.insert(model.clone()) {
            continue;
        }
        trace!(model = model.name(), depth = depth; "Visiting model");

        if depth >= depth_limit {
            continue;
        }

        for field in model.fields() {
            let candidates = resolve::candidate_args(field.type_expr())
                .map_err(|err| with_context(err, &model, field))?;

            for candidate in candidates {
                // Candidates no framework recognizes are plain types, not
                // component models.
                let Some(framework) = registry.find(&candidate) else {
                    continue;
                };
                let target = framework.adapt(&candidate)?;
                let edge = Edge::new(model.clone(), field.clone(), target.clone())?;
                seen_edges.insert(edge);
                worklist.push_back((target, depth + 1));
            }
        }
    }

    Ok(Discovery {
        root_models,
        models: seen_models.into_iter().collect(),
        edges: seen_edges.into_iter().collect(),
    })
}

fn with_context(err: ResolveError, model: &ModelRef, field: &FieldRef) -> DiagramError {
    match err {
        ResolveError::StringForwardRef(raw) => DiagramError::StringForwardRef {
            model: model.name().to_string(),
            field: field.name().to_string(),
            raw,
        },
        ResolveError::UnevaluatedForwardRef(reference) => DiagramError::UnevaluatedForwardRef {
            model: model.name().to_string(),
            field: field.name().to_string(),
            reference,
        },
    }
}
