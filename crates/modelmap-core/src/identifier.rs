//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type used as the stable identity key of a
//! model. Keys are derived from fully-qualified type names, so the same name
//! always interns to the same symbol and equality is a symbol comparison.

use std::{
    cmp::Ordering,
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Interned identity key for a model.
///
/// Two `Id`s created from the same string are equal; comparison and hashing
/// work on the interned symbol. Ordering resolves the underlying strings, so
/// sorting by `Id` yields the canonical lexicographic model order used by
/// diagrams.
///
/// # Examples
///
/// ```
/// use modelmap_core::identifier::Id;
///
/// let party = Id::new("tavern::Party");
/// let quest = Id::new("tavern::Quest");
///
/// assert_eq!(party, Id::new("tavern::Party"));
/// assert!(party < quest);
/// assert_eq!(party.resolve(), "tavern::Party");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string, interning it if it has not been seen.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Returns the string this identifier was interned from.
    pub fn resolve(&self) -> String {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Id symbol missing from interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.resolve() == *other
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            return Ordering::Equal;
        }
        self.resolve().cmp(&other.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_interns_to_same_id() {
        let a = Id::new("tavern::Party");
        let b = Id::new("tavern::Party");

        assert_eq!(a, b);
        assert_eq!(a.resolve(), b.resolve());
    }

    #[test]
    fn test_different_names_are_distinct() {
        let a = Id::new("tavern::Party");
        let b = Id::new("tavern::Quest");

        assert_ne!(a, b);
    }

    #[test]
    fn test_ordering_follows_resolved_strings() {
        let mut ids = vec![
            Id::new("tavern::QuestGiver"),
            Id::new("tavern::Adventurer"),
            Id::new("tavern::Party"),
        ];
        ids.sort();

        let names: Vec<String> = ids.iter().map(Id::resolve).collect();
        assert_eq!(
            names,
            vec!["tavern::Adventurer", "tavern::Party", "tavern::QuestGiver"]
        );
    }

    #[test]
    fn test_display_matches_resolve() {
        let id = Id::new("tavern::Adventurer");

        assert_eq!(id.to_string(), id.resolve());
    }

    #[test]
    fn test_str_comparison() {
        let id = Id::new("tavern::Party");

        assert_eq!(id, "tavern::Party");
    }
}
