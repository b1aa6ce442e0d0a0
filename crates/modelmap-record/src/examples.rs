//! Demo model declarations.
//!
//! Two ready-made namespaces exercise the framework end to end: `tavern`, a
//! straightforward composition tree, and `guild`, which declares its members
//! out of order and relies on forward-reference binding (and contains a
//! composition cycle).

use modelmap_core::types::{ForwardRef, TypeExpr};

use crate::descriptor::{RecordField, RecordType, scalar};
use crate::namespace::Namespace;

/// The `tavern` namespace: a party of adventurers and the quest they chase.
pub fn tavern() -> Namespace {
    let mut ns = Namespace::new("tavern");

    let adventurer = ns.declare(
        RecordType::builder("tavern::Adventurer")
            .description("A hero for hire, quick to volunteer for trouble.")
            .field(RecordField::new("name", scalar("String")))
            .field(
                RecordField::new("profession", scalar("String"))
                    .with_description("What the adventurer does for coin"),
            )
            .field(
                RecordField::new("level", scalar("u32"))
                    .with_description("Proficiency attained in the profession"),
            )
            .field(
                RecordField::new("alignment", scalar("Alignment"))
                    .with_description("Where the adventurer lands on the moral compass"),
            )
            .build()
            .expect("demo declarations are valid"),
    );

    let quest_giver = ns.declare(
        RecordType::builder("tavern::QuestGiver")
            .description("Someone with a task that needs doing.")
            .field(RecordField::new("name", scalar("String")))
            .field(
                RecordField::new("faction", TypeExpr::optional(scalar("String")))
                    .with_description("Faction the quest giver answers to, if any"),
            )
            .field(
                RecordField::new("location", scalar("String"))
                    .with_description("Where the quest giver can be found"),
            )
            .build()
            .expect("demo declarations are valid"),
    );

    let quest = ns.declare(
        RecordType::builder("tavern::Quest")
            .description("A task to complete, with a reward attached.")
            .field(RecordField::new("name", scalar("String")))
            .field(
                RecordField::new("giver", TypeExpr::named(quest_giver))
                    .with_description("Who offered the quest"),
            )
            .field(
                RecordField::new("reward_gold", scalar("u32"))
                    .with_description("Gold awarded on completion"),
            )
            .build()
            .expect("demo declarations are valid"),
    );

    ns.declare(
        RecordType::builder("tavern::Party")
            .description("A band of adventurers out doing things best not explained.")
            .field(
                RecordField::new("name", scalar("String"))
                    .with_description("What the party calls itself"),
            )
            .field(
                RecordField::new("formed_datetime", scalar("DateTime"))
                    .with_description("When the party was put together"),
            )
            .field(
                RecordField::new("members", TypeExpr::list(TypeExpr::named(adventurer)))
                    .with_description("The adventurers in the party"),
            )
            .field(
                RecordField::new("active_quest", TypeExpr::optional(TypeExpr::named(quest)))
                    .with_description("The quest the party is currently on"),
            )
            .build()
            .expect("demo declarations are valid"),
    );

    ns
}

/// The `guild` namespace: declared out of order, tied together with forward
/// references, and cyclic (a member points back at its guild).
pub fn guild() -> Namespace {
    let mut ns = Namespace::new("guild");

    ns.declare(
        RecordType::builder("guild::Member")
            .description("A card-carrying member of a guild.")
            .field(RecordField::new("name", scalar("String")))
            .field(
                RecordField::new("guild", TypeExpr::Forward(ForwardRef::new("Guild")))
                    .with_description("The guild this member belongs to"),
            )
            .build()
            .expect("demo declarations are valid"),
    );

    ns.declare(
        RecordType::builder("guild::Charter")
            .description("The rules a guild is founded on.")
            .field(RecordField::new("motto", scalar("String")))
            .field(RecordField::new("founded_year", scalar("u32")))
            .build()
            .expect("demo declarations are valid"),
    );

    ns.declare(
        RecordType::builder("guild::Guild")
            .description("A trade organization and its roster.")
            .field(RecordField::new("name", scalar("String")))
            .field(RecordField::new(
                "charter",
                TypeExpr::Forward(ForwardRef::new("Charter")),
            ))
            .field(RecordField::new(
                "members",
                TypeExpr::list(TypeExpr::Forward(ForwardRef::new("Member"))),
            ))
            .build()
            .expect("demo declarations are valid"),
    );

    ns.bind_forward_refs();
    ns
}

/// All demo namespaces, for name resolution in the CLI.
pub fn builtin_namespaces() -> Vec<Namespace> {
    vec![tavern(), guild()]
}
