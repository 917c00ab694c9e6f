//! The catalog - process-wide immutable card registry.
//!
//! A `Catalog` owns every manifest and indexes declarations by identity.
//! It is loaded once, validated once, and only ever read afterwards, so a
//! single instance is safe to share across concurrent composition calls
//! without locking.
//!
//! The one invariant the catalog enforces is identity/category uniqueness:
//! a name may legally appear in several manifests (composition keeps the
//! first occurrence), but never under two different categories.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use super::data;
use super::manifest::CardManifest;
use crate::cards::{CardCategory, CardDeclaration, CardName};

/// Catalog construction failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same identity was declared under two categories.
    #[error("card `{name}` declared as {second:?} but already registered as {first:?}")]
    CategoryConflict {
        name: CardName,
        first: CardCategory,
        second: CardCategory,
    },
}

/// Where a declaration lives inside the manifest list.
#[derive(Clone, Copy, Debug)]
struct Slot {
    manifest: usize,
    category: CardCategory,
    position: usize,
}

/// Immutable registry of every manifest and declaration.
///
/// ## Example
///
/// ```
/// use cardpool::{CardCategory, Catalog};
///
/// let catalog = Catalog::standard();
/// let capital = catalog.get(&"Capital".into()).unwrap();
/// assert_eq!(capital.category, CardCategory::Project);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    manifests: Vec<CardManifest>,
    index: FxHashMap<CardName, Slot>,
}

impl Catalog {
    /// Build a catalog from manifests, validating identity uniqueness
    /// across categories. When a name appears in several manifests under
    /// the same category, the index keeps the first occurrence.
    pub fn new(manifests: Vec<CardManifest>) -> Result<Self, CatalogError> {
        let mut index: FxHashMap<CardName, Slot> = FxHashMap::default();

        for (m, manifest) in manifests.iter().enumerate() {
            for category in CardCategory::ALL {
                for (position, card) in manifest.cards_of(category).iter().enumerate() {
                    match index.get(&card.name) {
                        None => {
                            index.insert(
                                card.name.clone(),
                                Slot { manifest: m, category, position },
                            );
                        }
                        Some(slot) if slot.category == category => {
                            // duplicate within one category: composition
                            // dedups first-seen, nothing to record
                        }
                        Some(slot) => {
                            return Err(CatalogError::CategoryConflict {
                                name: card.name.clone(),
                                first: slot.category,
                                second: category,
                            });
                        }
                    }
                }
            }
        }

        debug!(
            manifests = manifests.len(),
            cards = index.len(),
            "catalog loaded"
        );
        Ok(Self { manifests, index })
    }

    /// The compiled-in standard catalog, built on first use and shared
    /// read-only for the rest of the process.
    #[must_use]
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Catalog::new(data::standard_manifests())
                .expect("compiled-in catalog violates identity uniqueness")
        })
    }

    /// Look up a declaration by identity.
    #[must_use]
    pub fn get(&self, name: &CardName) -> Option<&CardDeclaration> {
        self.index.get(name).map(|slot| {
            &self.manifests[slot.manifest].cards_of(slot.category)[slot.position]
        })
    }

    /// Category an identity belongs to, if it exists.
    #[must_use]
    pub fn category_of(&self, name: &CardName) -> Option<CardCategory> {
        self.index.get(name).map(|slot| slot.category)
    }

    /// True when any manifest declares the identity.
    #[must_use]
    pub fn contains(&self, name: &CardName) -> bool {
        self.index.contains_key(name)
    }

    /// All manifests, in catalog order.
    #[must_use]
    pub fn manifests(&self) -> &[CardManifest] {
        &self.manifests
    }

    /// Number of distinct identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Gate;
    use crate::setup::SetupFlag;

    fn manifest(name: &str, cards: Vec<CardDeclaration>) -> CardManifest {
        CardManifest::new(name, Gate::Always).with_cards(cards)
    }

    #[test]
    fn test_lookup_and_category() {
        let catalog = Catalog::new(vec![manifest(
            "test",
            vec![
                CardDeclaration::new("Birds", CardCategory::Project).with_cost(10),
                CardDeclaration::new("Helion", CardCategory::Corporation),
            ],
        )])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&"Birds".into()).unwrap().cost, 10);
        assert_eq!(
            catalog.category_of(&"Helion".into()),
            Some(CardCategory::Corporation)
        );
        assert!(catalog.get(&"Fish".into()).is_none());
        assert!(catalog.category_of(&"Fish".into()).is_none());
    }

    #[test]
    fn test_cross_category_conflict_rejected() {
        let err = Catalog::new(vec![
            manifest(
                "a",
                vec![CardDeclaration::new("Capital", CardCategory::Project)],
            ),
            manifest(
                "b",
                vec![CardDeclaration::new("Capital", CardCategory::Corporation)],
            ),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::CategoryConflict {
                name: "Capital".into(),
                first: CardCategory::Project,
                second: CardCategory::Corporation,
            }
        );
    }

    #[test]
    fn test_same_category_duplicate_keeps_first() {
        // A card shipped by two modules is legal; the first manifest wins.
        let catalog = Catalog::new(vec![
            manifest(
                "a",
                vec![CardDeclaration::new("Potatoes", CardCategory::Project).with_cost(2)],
            ),
            manifest(
                "b",
                vec![CardDeclaration::new("Potatoes", CardCategory::Project).with_cost(9)],
            ),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&"Potatoes".into()).unwrap().cost, 2);
    }

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = Catalog::standard();
        assert!(!catalog.is_empty());
        assert!(catalog.contains(&"Capital".into()));
        // repeated calls hand back the same instance
        assert!(std::ptr::eq(catalog, Catalog::standard()));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.manifests().is_empty());
    }

    #[test]
    fn test_gated_manifest_activation() {
        let catalog = Catalog::new(vec![CardManifest::new(
            "ceo+community",
            Gate::all([SetupFlag::CeoExtension, SetupFlag::CommunityCardsOption]),
        )
        .with_card(CardDeclaration::new("Apollo", CardCategory::Ceo))])
        .unwrap();

        let setup = crate::setup::GameSetup::default().enable(SetupFlag::CeoExtension);
        assert!(!catalog.manifests()[0].enabled_for(&setup));
        assert!(catalog.manifests()[0]
            .enabled_for(&setup.enable(SetupFlag::CommunityCardsOption)));
    }
}
