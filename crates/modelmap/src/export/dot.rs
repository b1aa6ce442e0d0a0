//! DOT language rendering of composition diagrams.
//!
//! Models become nodes labelled with HTML-like field tables; edges run from
//! the source field's east port to the target node, with a crow's foot
//! arrowhead encoding the relationship's cardinality and modality.

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, Id, Node, NodeId, Port, Stmt, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::debug;
use modelmap_core::{Cardinality, Diagram, Edge, Modality};

fn plain(value: impl Into<String>) -> Id {
    Id::Plain(value.into())
}

fn quoted(value: &str) -> Id {
    Id::Escaped(format!("\"{value}\""))
}

fn attr(key: &str, value: Id) -> Attribute {
    Attribute(plain(key), value)
}

/// Arrow shape for an edge's head, in crow's foot notation: `crow`/`nonetee`
/// for many/one, `odot`/`tee` for optional/mandatory.
fn arrowhead(edge: &Edge) -> String {
    let (cardinality, modality) = edge.cardinality_modality();
    let cardinality = match cardinality {
        Cardinality::Many => "crow",
        Cardinality::One => "nonetee",
    };
    let modality = match modality {
        Modality::Optional => "odot",
        Modality::Mandatory => "tee",
    };
    format!("{cardinality}{modality}")
}

/// Build the DOT graph structure for a diagram.
pub fn to_graph(diagram: &Diagram) -> Graph {
    let mut stmts: Vec<Stmt> = vec![
        Stmt::Attribute(attr("nodesep", plain("0.5"))),
        Stmt::Attribute(attr("ranksep", plain("1.5"))),
        Stmt::Attribute(attr("rankdir", plain(diagram.orientation().rankdir()))),
        Stmt::Attribute(attr("fontsize", plain("9"))),
        Stmt::Attribute(attr("fontcolor", plain("gray66"))),
    ];

    for model in diagram.models() {
        stmts.push(Stmt::Node(Node {
            id: NodeId(quoted(&model.key().resolve()), None),
            attributes: vec![
                attr("label", Id::Html(model.dot_label())),
                attr("shape", plain("plain")),
                attr("fontsize", plain("14")),
            ],
        }));
    }

    for edge in diagram.edges() {
        let tail = NodeId(
            quoted(&edge.source().key().resolve()),
            Some(Port(
                Some(plain(format!("{}_e", edge.source_field().name()))),
                Some("e".to_string()),
            )),
        );
        let head = NodeId(quoted(&edge.target().key().resolve()), None);
        stmts.push(Stmt::Edge(DotEdge {
            ty: EdgeTy::Pair(Vertex::N(tail), Vertex::N(head)),
            attributes: vec![attr("arrowhead", plain(arrowhead(edge)))],
        }));
    }

    debug!(
        diagram = diagram.name(),
        statements = stmts.len();
        "Built DOT graph"
    );

    Graph::DiGraph {
        id: quoted(diagram.name()),
        strict: false,
        stmts,
    }
}

/// Generate the DOT language representation of a diagram.
pub fn to_dot(diagram: &Diagram) -> String {
    to_graph(diagram).print(&mut PrinterContext::default())
}

/// Render a diagram to `out` by invoking the installed Graphviz `dot`
/// binary.
///
/// # Errors
///
/// Returns [`ExportError::Graphviz`](crate::export::ExportError::Graphviz)
/// when the `dot` binary is missing or fails.
#[cfg(feature = "graphviz")]
pub fn render(
    diagram: &Diagram,
    out: &std::path::Path,
    format: graphviz_rust::cmd::Format,
) -> Result<(), crate::export::ExportError> {
    use graphviz_rust::cmd::CommandArg;

    let _ = graphviz_rust::exec(
        to_graph(diagram),
        &mut PrinterContext::default(),
        vec![format.into(), CommandArg::Output(out.display().to_string())],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use modelmap_core::Orientation;
    use modelmap_core::types::TypeExpr;
    use modelmap_record::{RecordField, RecordType, scalar};

    use super::*;
    use crate::registry::AdapterRegistry;
    use crate::{DiagramBuilder, RootSource};

    fn quest_diagram(orientation: Orientation) -> Diagram {
        let giver = RecordType::builder("tavern::QuestGiver")
            .field(RecordField::new("name", scalar("String")))
            .build()
            .unwrap();
        let quest = RecordType::builder("tavern::Quest")
            .field(RecordField::new("name", scalar("String")))
            .field(RecordField::new(
                "giver",
                TypeExpr::optional(TypeExpr::named(giver)),
            ))
            .build()
            .unwrap();

        DiagramBuilder::new(AdapterRegistry::with_builtins())
            .with_orientation(orientation)
            .create([RootSource::Model(quest)])
            .unwrap()
    }

    #[test]
    fn test_dot_output_contains_nodes_and_edge_ports() {
        let dot = to_dot(&quest_diagram(Orientation::Horizontal));

        assert!(dot.contains("digraph"));
        assert!(dot.contains("tavern::Quest"));
        assert!(dot.contains("tavern::QuestGiver"));
        assert!(dot.contains("giver_e"));
        assert!(dot.contains("rankdir"));
        assert!(dot.contains("LR"));
    }

    #[test]
    fn test_vertical_orientation_maps_to_rankdir_tb() {
        let dot = to_dot(&quest_diagram(Orientation::Vertical));

        assert!(dot.contains("TB"));
        assert!(!dot.contains("LR"));
    }

    #[test]
    fn test_arrowheads_encode_cardinality_and_modality() {
        let dot = to_dot(&quest_diagram(Orientation::Horizontal));

        // Quest.giver is Option<QuestGiver>: one/optional.
        assert!(dot.contains("noneteeodot"));
    }

    #[test]
    fn test_many_valued_fields_render_crow_arrowheads() {
        let adventurer = RecordType::builder("tavern::Adventurer").build().unwrap();
        let party = RecordType::builder("tavern::Party")
            .field(RecordField::new(
                "members",
                TypeExpr::list(TypeExpr::named(adventurer)),
            ))
            .build()
            .unwrap();

        let diagram = DiagramBuilder::new(AdapterRegistry::with_builtins())
            .create([RootSource::Model(party)])
            .unwrap();

        assert!(to_dot(&diagram).contains("crowodot"));
    }

    #[test]
    fn test_labels_are_html_tables() {
        let dot = to_dot(&quest_diagram(Orientation::Horizontal));

        assert!(dot.contains("<table"));
        assert!(dot.contains("</table>"));
    }
}
