//! Composed pools - the engine's output.

use crate::cards::{CardCategory, CardDeclaration, CardName, Tag};

use super::tags::derive_tags;

/// The five category pools composed for one setup.
///
/// Pools borrow declarations from the catalog; each pool is ordered
/// (first-seen catalog order, force-includes appended) and the five
/// identity sets are pairwise disjoint. Downstream consumers treat the
/// ordering as opaque - play order comes from shuffling, which is not
/// this crate's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedPools<'c> {
    pub corporations: Vec<&'c CardDeclaration>,
    pub preludes: Vec<&'c CardDeclaration>,
    pub projects: Vec<&'c CardDeclaration>,
    pub standard_projects: Vec<&'c CardDeclaration>,
    pub ceos: Vec<&'c CardDeclaration>,
}

impl<'c> ComposedPools<'c> {
    /// One pool by category.
    #[must_use]
    pub fn pool(&self, category: CardCategory) -> &[&'c CardDeclaration] {
        match category {
            CardCategory::Corporation => &self.corporations,
            CardCategory::Prelude => &self.preludes,
            CardCategory::Project => &self.projects,
            CardCategory::StandardProject => &self.standard_projects,
            CardCategory::Ceo => &self.ceos,
        }
    }

    /// True when any pool holds the identity.
    #[must_use]
    pub fn contains(&self, name: &CardName) -> bool {
        self.iter().any(|card| &card.name == name)
    }

    /// Every pooled declaration, in category order then pool order.
    pub fn iter(&self) -> impl Iterator<Item = &'c CardDeclaration> + '_ {
        CardCategory::ALL
            .into_iter()
            .flat_map(move |category| self.pool(category).iter().copied())
    }

    /// Total cards across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        CardCategory::ALL
            .iter()
            .map(|&category| self.pool(category).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct tags actually reachable, in first-seen order. The CEO
    /// pool is never scanned.
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        derive_tags(self)
    }
}
