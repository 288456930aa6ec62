//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type used for every element identifier of a
//! decision document (`definitions`, `decision`, `input1`, ...).

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Efficient element identifier type using string interning
///
/// Identifiers are opaque tokens. Uniqueness is only meaningful within one
/// loaded document and is tracked by [`Ids`](crate::ids::Ids), not by this type.
///
/// # Examples
///
/// ```
/// use dmn_modeler_core::identifier::Id;
///
/// let decision_id = Id::new("decision");
/// let table_id = Id::new("decisionTable");
///
/// assert_ne!(decision_id, table_id);
/// assert_eq!(decision_id, "decision");
///
/// let generated = Id::with_prefix("Decision_", "0x1b2c");
/// assert_eq!(generated, "Decision_0x1b2c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Creates an `Id` by joining a prefix and a generated suffix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Element-type prefix, e.g. `"Decision_"`.
    /// * `suffix` - Generated part of the identifier.
    pub fn with_prefix(prefix: &str, suffix: &str) -> Self {
        Self::new(&format!("{prefix}{suffix}"))
    }

    /// Returns the length of the identifier in bytes.
    pub fn len(&self) -> usize {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .map(str::len)
                .expect("Symbol should exist in interner")
        })
    }

    /// Returns true if this is the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_string()
        });
        write!(f, "{value}")
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "decision"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                == other
        })
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("decision");
        let id2 = Id::new("decision");
        let id3 = Id::new("decisionTable");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "decision");
    }

    #[test]
    fn test_with_prefix() {
        let id = Id::with_prefix("InputClause_", "1k3f9a");
        assert_eq!(id, "InputClause_1k3f9a");
        assert_eq!(id, Id::new("InputClause_1k3f9a"));
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(Id::new("output1").len(), 7);
        assert!(!Id::new("output1").is_empty());
        assert!(Id::new("").is_empty());
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("inputExpression1");
        assert_eq!(format!("{id}"), "inputExpression1");
        assert_eq!(id.to_string(), "inputExpression1");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "definitions".into();
        let id2 = Id::new("definitions");

        assert_eq!(id1, id2);
        assert_eq!(id1, "definitions");
    }

    #[test]
    fn test_from_str() {
        let id: Id = "input1".parse().unwrap();
        assert_eq!(id, "input1");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("Decision_0abc");

        assert!(id == "Decision_0abc");
        assert!(id != "Decision_");

        let slice: &str = "Decision_0abc";
        assert!(id == slice);

        let empty = Id::new("");
        assert!(empty == "");
        assert!(empty != "non-empty");
    }
}
