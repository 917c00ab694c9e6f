//! Card identity.
//!
//! A `CardName` identifies a card declaration across the whole catalog.
//! Names are globally unique regardless of category - the catalog rejects
//! a name that appears under two categories at load time.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Unique identifier for a card declaration.
///
/// This identifies the "type" of card (e.g., "Solar Farm"), not a copy
/// in a running game. Ban and include override lists reference these
/// names, so the type serializes as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    /// Create a new card name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Lets name sets answer `contains("Solar Farm")` without an allocation.
impl Borrow<str> for CardName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_name_equality() {
        assert_eq!(CardName::new("Birds"), CardName::from("Birds"));
        assert_ne!(CardName::new("Birds"), CardName::new("Fish"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardName::new("Solar Farm")), "Solar Farm");
    }

    #[test]
    fn test_set_lookup_by_str() {
        let mut set = FxHashSet::default();
        set.insert(CardName::new("Merger"));
        assert!(set.contains("Merger"));
        assert!(!set.contains("Capital"));
    }

    #[test]
    fn test_serde_transparent() {
        let name = CardName::new("Capital");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Capital\"");
        let back: CardName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
