//! Thematic card tags.
//!
//! Tags label cards for downstream gameplay (discounts, requirements,
//! scoring). This crate never resolves them - it only reports which tags
//! are reachable under a given setup, in first-seen catalog order.

use serde::{Deserialize, Serialize};

/// Thematic label attached to a card.
///
/// A card may carry the same tag more than once (e.g. two Building tags);
/// the tag list on a declaration is ordered and duplicates are preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Building,
    Space,
    Science,
    Power,
    Earth,
    Jovian,
    Venus,
    Mars,
    Moon,
    Plant,
    Microbe,
    Animal,
    City,
    Wild,
    Event,
    Clone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Tag::Jovian).unwrap();
        assert_eq!(json, "\"Jovian\"");
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tag::Jovian);
    }
}
