//! Integration tests for the diagram creation API.
//!
//! These exercise the public API end to end over the demo namespaces.

use std::hash::{DefaultHasher, Hash, Hasher};

use modelmap::{Cardinality, DiagramBuilder, Modality, Orientation, RootSource, create, export};
use modelmap_record::examples;

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn party_root() -> RootSource {
    let tavern = examples::tavern();
    RootSource::Model(tavern.get("Party").expect("Party is declared").clone())
}

#[test]
fn test_party_at_depth_two_finds_the_whole_tree() {
    let diagram = create(
        [party_root()],
        2,
        Orientation::Horizontal,
    )
    .expect("Party should be diagrammable");

    assert_eq!(diagram.name(), "Party");

    let model_names: Vec<&str> = diagram.models().iter().map(|m| m.name()).collect();
    assert_eq!(
        model_names,
        vec!["Adventurer", "Party", "Quest", "QuestGiver"]
    );

    let edges: Vec<(String, String, String)> = diagram
        .edges()
        .iter()
        .map(|e| {
            (
                e.source().name().to_string(),
                e.source_field().name().to_string(),
                e.target().name().to_string(),
            )
        })
        .collect();
    assert_eq!(
        edges,
        vec![
            (
                "Party".to_string(),
                "members".to_string(),
                "Adventurer".to_string()
            ),
            (
                "Party".to_string(),
                "active_quest".to_string(),
                "Quest".to_string()
            ),
            (
                "Quest".to_string(),
                "giver".to_string(),
                "QuestGiver".to_string()
            ),
        ]
    );

    let classifications: Vec<(Cardinality, Modality)> = diagram
        .edges()
        .iter()
        .map(|e| e.cardinality_modality())
        .collect();
    assert_eq!(
        classifications,
        vec![
            (Cardinality::Many, Modality::Optional),
            (Cardinality::One, Modality::Optional),
            (Cardinality::One, Modality::Mandatory),
        ]
    );
}

#[test]
fn test_party_at_depth_one_stops_before_quest_giver() {
    let diagram = create([party_root()], 1, Orientation::Horizontal)
        .expect("Party should be diagrammable");

    let model_names: Vec<&str> = diagram.models().iter().map(|m| m.name()).collect();
    assert_eq!(model_names, vec!["Adventurer", "Party", "Quest"]);
    assert_eq!(diagram.edges().len(), 2);
}

#[test]
fn test_repeated_calls_produce_equal_diagrams() {
    let first = create([party_root()], 2, Orientation::Horizontal).unwrap();
    let second = create([party_root()], 2, Orientation::Horizontal).unwrap();

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn test_namespace_roots_scan_every_declared_model() {
    let tavern = examples::tavern();

    let diagram = create(
        [RootSource::from(&tavern)],
        1,
        Orientation::Horizontal,
    )
    .expect("tavern should be diagrammable");

    // All four models are roots, so the whole tree is present even at
    // depth 1.
    assert_eq!(diagram.models().len(), 4);
    assert_eq!(diagram.edges().len(), 3);
    // The diagram is named after the first declaration in the namespace.
    assert_eq!(diagram.name(), "Adventurer");
}

#[test]
fn test_guild_namespace_with_bound_forward_refs_and_cycle() {
    let guild = examples::guild();

    let diagram = create([RootSource::from(&guild)], 3, Orientation::Horizontal)
        .expect("bound forward references should resolve");

    let model_names: Vec<&str> = diagram.models().iter().map(|m| m.name()).collect();
    assert_eq!(model_names, vec!["Charter", "Guild", "Member"]);
    // Guild.charter, Guild.members, Member.guild
    assert_eq!(diagram.edges().len(), 3);
}

#[test]
fn test_builder_is_reusable_across_diagrams() {
    let builder = DiagramBuilder::default().with_depth_limit(2);

    let party = builder.create([party_root()]).expect("first create");
    let tavern = examples::tavern();
    let quest = builder
        .create([RootSource::Model(
            tavern.get("Quest").expect("Quest is declared").clone(),
        )])
        .expect("second create");

    assert_eq!(party.name(), "Party");
    assert_eq!(quest.name(), "Quest");
    assert_eq!(quest.models().len(), 2);
}

#[test]
fn test_dot_export_of_the_demo_namespace() {
    let diagram = create([party_root()], 2, Orientation::Vertical).unwrap();
    let dot = export::to_dot(&diagram);

    assert!(dot.contains("digraph"));
    for key in [
        "tavern::Adventurer",
        "tavern::Party",
        "tavern::Quest",
        "tavern::QuestGiver",
    ] {
        assert!(dot.contains(key), "missing node for {key}");
    }
    // Party.members is many/optional, Quest.giver is one/mandatory.
    assert!(dot.contains("crowodot"));
    assert!(dot.contains("noneteetee"));
}
