//! Card declarations - static card data.
//!
//! `CardDeclaration` holds the immutable properties of one card: identity,
//! category, cost, tags, the expansion gate that must hold for the card to
//! be eligible, and the variant flags it is incompatible with.
//!
//! Declarations are built once at catalog load and never mutated; the
//! composition engine only reads them. Everything a card *does* when played
//! lives outside this crate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::gate::Gate;
use super::name::CardName;
use super::tag::Tag;
use crate::setup::{GameSetup, SetupFlag};

/// Card category - a mutually exclusive partition of the identity space.
///
/// A name never appears under two categories; the catalog enforces this
/// at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Corporation,
    Prelude,
    Project,
    StandardProject,
    Ceo,
}

impl CardCategory {
    /// Every category, in the order pools are reported.
    pub const ALL: [CardCategory; 5] = [
        CardCategory::Corporation,
        CardCategory::Prelude,
        CardCategory::Project,
        CardCategory::StandardProject,
        CardCategory::Ceo,
    ];
}

/// Static card declaration.
///
/// Equality and hashing are by identity: two declarations with the same
/// name are the same card.
///
/// ## Example
///
/// ```
/// use cardpool::{CardCategory, CardDeclaration, Gate, SetupFlag, Tag};
///
/// let card = CardDeclaration::new("Venusian Insects", CardCategory::Project)
///     .with_cost(5)
///     .with_tags([Tag::Venus, Tag::Microbe])
///     .gated_by(Gate::flag(SetupFlag::VenusNextExtension));
///
/// assert_eq!(card.tags.as_slice(), [Tag::Venus, Tag::Microbe]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDeclaration {
    /// Unique identity across the whole catalog.
    pub name: CardName,

    /// Category the card belongs to. Immutable - override lists can never
    /// move a card across categories.
    pub category: CardCategory,

    /// Printed cost in megacredits (starting money for corporations).
    pub cost: u32,

    /// Ordered tag list. Duplicates are allowed and preserved.
    pub tags: SmallVec<[Tag; 4]>,

    /// Expansion requirements. Must hold under the setup for the card to
    /// be eligible, on top of the owning manifest being enabled.
    pub gate: Gate,

    /// Variant flags under which the card must never appear, regardless
    /// of expansion membership.
    pub incompatibilities: SmallVec<[SetupFlag; 2]>,
}

impl CardDeclaration {
    /// Create a new declaration with no cost, tags, or gating.
    #[must_use]
    pub fn new(name: impl Into<CardName>, category: CardCategory) -> Self {
        Self {
            name: name.into(),
            category,
            cost: 0,
            tags: SmallVec::new(),
            gate: Gate::Always,
            incompatibilities: SmallVec::new(),
        }
    }

    /// Set the printed cost.
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Append tags in declared order.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Set the expansion gate.
    #[must_use]
    pub fn gated_by(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    /// Mark the card incompatible with a variant flag.
    #[must_use]
    pub fn incompatible_with(mut self, flag: SetupFlag) -> Self {
        self.incompatibilities.push(flag);
        self
    }

    /// True when any incompatibility flag is active in the setup.
    #[must_use]
    pub fn blocked_by(&self, setup: &GameSetup) -> bool {
        self.incompatibilities
            .iter()
            .any(|&flag| setup.is_enabled(flag))
    }
}

impl PartialEq for CardDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CardDeclaration {}

impl std::hash::Hash for CardDeclaration {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_builder() {
        let card = CardDeclaration::new("Research", CardCategory::Project)
            .with_cost(11)
            .with_tags([Tag::Science, Tag::Science]);

        assert_eq!(card.name, CardName::new("Research"));
        assert_eq!(card.category, CardCategory::Project);
        assert_eq!(card.cost, 11);
        // duplicate tags are preserved in order
        assert_eq!(card.tags.as_slice(), [Tag::Science, Tag::Science]);
        assert_eq!(card.gate, Gate::Always);
        assert!(card.incompatibilities.is_empty());
    }

    #[test]
    fn test_equality_is_by_identity() {
        let a = CardDeclaration::new("Capital", CardCategory::Project).with_cost(26);
        let b = CardDeclaration::new("Capital", CardCategory::Project).with_cost(99);
        let c = CardDeclaration::new("Birds", CardCategory::Project).with_cost(26);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_blocked_by_variant() {
        let merger = CardDeclaration::new("Merger", CardCategory::Prelude)
            .incompatible_with(SetupFlag::TwoCorpsVariant);

        assert!(!merger.blocked_by(&GameSetup::default()));
        let setup = GameSetup::default().enable(SetupFlag::TwoCorpsVariant);
        assert!(merger.blocked_by(&setup));
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = CardDeclaration::new("Domed Crater", CardCategory::Project)
            .with_cost(24)
            .with_tags([Tag::City, Tag::Building])
            .gated_by(Gate::flag(SetupFlag::CorporateEra));

        let json = serde_json::to_string(&card).unwrap();
        let back: CardDeclaration = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, card.name);
        assert_eq!(back.tags, card.tags);
        assert_eq!(back.gate, card.gate);
    }
}
