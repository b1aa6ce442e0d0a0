//! Diagram entities: composition edges and the canonical diagram snapshot.
//!
//! This module contains the value types handed to rendering:
//! - [`Edge`] - a composition relationship from a source model, through one
//!   of its fields, to a target model
//! - [`Diagram`] - the deduplicated, canonically ordered snapshot of
//!   discovered models and edges
//! - [`Orientation`] - the layout direction passed through to the renderer
//! - [`Cardinality`] / [`Modality`] - the relationship classification derived
//!   from a field's is-many / is-nullable predicates

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    contract::{FieldRef, ModelRef},
    error::DiagramError,
};

/// Layout direction for the rendered diagram.
///
/// The core does not interpret the orientation; it is carried on the diagram
/// and mapped to the renderer's layout direction (Graphviz `rankdir`). The
/// names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left-to-right layout (default)
    #[default]
    Horizontal,
    /// Top-to-bottom layout
    Vertical,
}

impl Orientation {
    /// The Graphviz `rankdir` value for this orientation.
    pub fn rankdir(self) -> &'static str {
        match self {
            Orientation::Horizontal => "LR",
            Orientation::Vertical => "TB",
        }
    }
}

impl FromStr for Orientation {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err("Unsupported orientation"),
        }
    }
}

impl From<Orientation> for &'static str {
    fn from(val: Orientation) -> Self {
        match val {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Whether a field holds one or many instances of the target model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    One,
    Many,
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::One => write!(f, "one"),
            Cardinality::Many => write!(f, "many"),
        }
    }
}

/// Whether a relationship is mandatory or may be absent/empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Mandatory,
    Optional,
}

impl Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::Mandatory => write!(f, "mandatory"),
            Modality::Optional => write!(f, "optional"),
        }
    }
}

/// A composition edge: `source` holds instances of `target` through
/// `source_field`.
///
/// Edges compare and hash by the (source, source field, target) triple, so a
/// composition discovered through several paths collapses to one edge. The
/// total order is (source, position of the field within the source's field
/// sequence, target), which fixes rendering order independent of discovery
/// order.
#[derive(Debug, Clone)]
pub struct Edge {
    source: ModelRef,
    source_field: FieldRef,
    target: ModelRef,
    field_position: usize,
}

impl Edge {
    /// Create an edge after validating that `source_field` belongs to
    /// `source`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownField`] when the field is not a member
    /// of the source model's field sequence.
    pub fn new(
        source: ModelRef,
        source_field: FieldRef,
        target: ModelRef,
    ) -> Result<Self, DiagramError> {
        let field_position = source
            .fields()
            .iter()
            .position(|field| field.name() == source_field.name())
            .ok_or_else(|| DiagramError::UnknownField {
                model: source.name().to_string(),
                field: source_field.name().to_string(),
            })?;

        Ok(Self {
            source,
            source_field,
            target,
            field_position,
        })
    }

    /// The composite model the edge starts from.
    pub fn source(&self) -> &ModelRef {
        &self.source
    }

    /// The field on the source whose type contains the target.
    pub fn source_field(&self) -> &FieldRef {
        &self.source_field
    }

    /// The component model the edge points at.
    pub fn target(&self) -> &ModelRef {
        &self.target
    }

    /// Position of the source field within the source's field sequence.
    pub fn field_position(&self) -> usize {
        self.field_position
    }

    /// Classify the relationship from the source field's predicates.
    ///
    /// Many-valued fields are always optional-modality: an empty collection
    /// satisfies "zero" without violating the field's presence.
    pub fn cardinality_modality(&self) -> (Cardinality, Modality) {
        let cardinality = if self.source_field.is_many() {
            Cardinality::Many
        } else {
            Cardinality::One
        };
        let modality = if self.source_field.is_nullable() || self.source_field.is_many() {
            Modality::Optional
        } else {
            Modality::Mandatory
        };
        (cardinality, modality)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.source_field == other.source_field
            && self.target == other.target
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.key().hash(state);
        self.source_field.name().hash(state);
        self.target.key().hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.field_position.cmp(&other.field_position))
            .then_with(|| self.target.cmp(&other.target))
    }
}

/// The canonical, immutable diagram snapshot.
///
/// Models are sorted by identity key and edges by (source, field position,
/// target); duplicates collapse. Construction is therefore deterministic and
/// order-independent with respect to traversal order, which makes equality
/// and hashing meaningful for reproducibility tests.
///
/// Equality and hashing cover the ordered model and edge sequences, matching
/// the identity the renderer consumes; the name and orientation are
/// presentation attributes and do not participate.
#[derive(Debug, Clone)]
pub struct Diagram {
    name: String,
    orientation: Orientation,
    models: Vec<ModelRef>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Build a diagram from raw discovery output.
    ///
    /// `name` comes from the first supplied root model, not from the sorted
    /// order.
    pub fn new(
        name: impl Into<String>,
        orientation: Orientation,
        mut models: Vec<ModelRef>,
        mut edges: Vec<Edge>,
    ) -> Self {
        models.sort();
        models.dedup();
        edges.sort();
        edges.dedup();

        #[cfg(debug_assertions)]
        for edge in &edges {
            debug_assert!(
                models.contains(edge.source()),
                "Edge source {} is not among the diagram's models",
                edge.source().name(),
            );
            debug_assert!(
                models.contains(edge.target()),
                "Edge target {} is not among the diagram's models",
                edge.target().name(),
            );
        }

        let name = name.into();
        debug!(
            name = name,
            model_count = models.len(),
            edge_count = edges.len();
            "Assembled diagram"
        );

        Self {
            name,
            orientation,
            models,
            edges,
        }
    }

    /// Diagram name, taken from the first root model.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout direction for the renderer.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Models in canonical order.
    pub fn models(&self) -> &[ModelRef] {
        &self.models
    }

    /// Edges in canonical order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl PartialEq for Diagram {
    fn eq(&self, other: &Self) -> bool {
        self.models == other.models && self.edges == other.edges
    }
}

impl Eq for Diagram {}

impl Hash for Diagram {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.models.hash(state);
        self.edges.hash(state);
    }
}
