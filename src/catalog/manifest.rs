//! Card manifests - closed per-expansion card bundles.
//!
//! A manifest groups every declaration one expansion/module ships,
//! partitioned by category, together with the activation gate deciding
//! whether the module participates in a session at all. Manifests are
//! built once and never mutated afterwards.

use crate::cards::{CardCategory, CardDeclaration, CardName, Gate};
use crate::setup::GameSetup;

/// Named, closed bundle of card declarations for one expansion/module.
///
/// ## Example
///
/// ```
/// use cardpool::{CardCategory, CardDeclaration, CardManifest, Gate, GameSetup, SetupFlag};
///
/// let manifest = CardManifest::new("venus", Gate::flag(SetupFlag::VenusNextExtension))
///     .with_card(CardDeclaration::new("Dawn City", CardCategory::Project));
///
/// assert!(!manifest.enabled_for(&GameSetup::default()));
/// assert!(manifest.contains(&"Dawn City".into()));
/// ```
#[derive(Clone, Debug)]
pub struct CardManifest {
    name: String,
    activation: Gate,
    corporations: Vec<CardDeclaration>,
    preludes: Vec<CardDeclaration>,
    projects: Vec<CardDeclaration>,
    standard_projects: Vec<CardDeclaration>,
    ceos: Vec<CardDeclaration>,
}

impl CardManifest {
    /// Create an empty manifest with an activation gate.
    #[must_use]
    pub fn new(name: impl Into<String>, activation: Gate) -> Self {
        Self {
            name: name.into(),
            activation,
            corporations: Vec::new(),
            preludes: Vec::new(),
            projects: Vec::new(),
            standard_projects: Vec::new(),
            ceos: Vec::new(),
        }
    }

    /// Add a card, routed into its category's list (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardDeclaration) -> Self {
        self.push(card);
        self
    }

    /// Add cards in order (builder pattern).
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardDeclaration>) -> Self {
        for card in cards {
            self.push(card);
        }
        self
    }

    /// Add a card, routed into its category's list.
    pub fn push(&mut self, card: CardDeclaration) {
        match card.category {
            CardCategory::Corporation => self.corporations.push(card),
            CardCategory::Prelude => self.preludes.push(card),
            CardCategory::Project => self.projects.push(card),
            CardCategory::StandardProject => self.standard_projects.push(card),
            CardCategory::Ceo => self.ceos.push(card),
        }
    }

    /// Manifest name (for diagnostics).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activation gate.
    #[must_use]
    pub fn activation(&self) -> &Gate {
        &self.activation
    }

    /// True when the activation gate holds under the setup.
    #[must_use]
    pub fn enabled_for(&self, setup: &GameSetup) -> bool {
        self.activation.holds(setup)
    }

    /// Cards of one category, in declaration order.
    #[must_use]
    pub fn cards_of(&self, category: CardCategory) -> &[CardDeclaration] {
        match category {
            CardCategory::Corporation => &self.corporations,
            CardCategory::Prelude => &self.preludes,
            CardCategory::Project => &self.projects,
            CardCategory::StandardProject => &self.standard_projects,
            CardCategory::Ceo => &self.ceos,
        }
    }

    /// True when any category of this manifest declares the identity.
    #[must_use]
    pub fn contains(&self, name: &CardName) -> bool {
        CardCategory::ALL
            .iter()
            .any(|&category| self.cards_of(category).iter().any(|c| &c.name == name))
    }

    /// Total declarations across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        CardCategory::ALL
            .iter()
            .map(|&category| self.cards_of(category).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
