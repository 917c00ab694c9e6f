//! The composition engine.
//!
//! `compose` turns an immutable catalog plus one session's setup into the
//! five category pools. It is a pure function: no I/O, no shared mutable
//! state, fresh output on every call, identical output (order included)
//! for identical input.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::pools::ComposedPools;
use crate::cards::{CardCategory, CardDeclaration, CardName};
use crate::catalog::{Catalog, CardManifest};
use crate::setup::GameSetup;

/// Compose the legal card pools for one session.
///
/// Per category: union the enabled manifests' cards in catalog order,
/// dedup by identity keeping the first occurrence, then drop cards whose
/// expansion gate fails, whose incompatibility flags are active, or whose
/// identity is banned. Dedup happens before the filters, so a first
/// occurrence that gets filtered out is not resurrected by a later
/// duplicate.
///
/// The Project pool additionally honors `included_cards`: a
/// Project-category declaration kept out purely by expansion gating is
/// appended (catalog order) unless it is banned, variant-blocked, or its
/// identity is already claimed. Identities of other intrinsic categories
/// are never pulled into the Project pool, and identities unknown to the
/// catalog are ignored.
///
/// ## Example
///
/// ```
/// use cardpool::{compose, Catalog, GameSetup, SetupFlag};
///
/// let setup = GameSetup::default().enable(SetupFlag::AresExtension);
/// let pools = compose(Catalog::standard(), &setup);
/// assert!(pools.contains(&"Solar Farm".into()));
/// assert!(!pools.contains(&"Capital".into()));
/// ```
#[must_use]
pub fn compose<'c>(catalog: &'c Catalog, setup: &GameSetup) -> ComposedPools<'c> {
    let enabled: Vec<&CardManifest> = catalog
        .manifests()
        .iter()
        .filter(|manifest| manifest.enabled_for(setup))
        .collect();

    let mut pools = ComposedPools {
        corporations: gather(&enabled, CardCategory::Corporation, setup),
        preludes: gather(&enabled, CardCategory::Prelude, setup),
        projects: gather(&enabled, CardCategory::Project, setup),
        standard_projects: gather(&enabled, CardCategory::StandardProject, setup),
        ceos: gather(&enabled, CardCategory::Ceo, setup),
    };
    force_include_projects(catalog, setup, &mut pools);

    debug!(
        enabled_manifests = enabled.len(),
        corporations = pools.corporations.len(),
        preludes = pools.preludes.len(),
        projects = pools.projects.len(),
        standard_projects = pools.standard_projects.len(),
        ceos = pools.ceos.len(),
        "pools composed"
    );
    pools
}

/// Union one category across enabled manifests, dedup first-seen, then
/// apply gate, incompatibility, and ban filters.
fn gather<'c>(
    enabled: &[&'c CardManifest],
    category: CardCategory,
    setup: &GameSetup,
) -> Vec<&'c CardDeclaration> {
    let mut seen: FxHashSet<&'c CardName> = FxHashSet::default();
    let mut pool = Vec::new();
    for manifest in enabled {
        for card in manifest.cards_of(category) {
            if !seen.insert(&card.name) {
                continue;
            }
            if !card.gate.holds(setup) {
                continue;
            }
            if card.blocked_by(setup) {
                continue;
            }
            if setup.is_banned(&card.name) {
                continue;
            }
            pool.push(card);
        }
    }
    pool
}

/// Append force-included Project cards. Runs after every pool is gathered
/// so an include can never duplicate an identity another pool claimed.
fn force_include_projects<'c>(
    catalog: &'c Catalog,
    setup: &GameSetup,
    pools: &mut ComposedPools<'c>,
) {
    if setup.included_cards.is_empty() {
        return;
    }

    let mut claimed: FxHashSet<&'c CardName> = pools.iter().map(|card| &card.name).collect();

    for manifest in catalog.manifests() {
        for card in manifest.cards_of(CardCategory::Project) {
            if !setup.is_included(&card.name) || claimed.contains(&card.name) {
                continue;
            }
            // ban wins over include; variant incompatibilities still apply
            if setup.is_banned(&card.name) || card.blocked_by(setup) {
                continue;
            }
            claimed.insert(&card.name);
            pools.projects.push(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Gate, Tag};
    use crate::setup::SetupFlag;

    fn catalog() -> Catalog {
        let base = CardManifest::new("base", Gate::Always)
            .with_card(CardDeclaration::new("Credicor", CardCategory::Corporation).with_cost(57))
            .with_card(
                CardDeclaration::new("Capital", CardCategory::Project)
                    .with_cost(26)
                    .with_tags([Tag::City, Tag::Building])
                    .incompatible_with(SetupFlag::AresExtension),
            )
            .with_card(CardDeclaration::new("Birds", CardCategory::Project).with_cost(10));
        let venus = CardManifest::new("venus", Gate::flag(SetupFlag::VenusNextExtension))
            .with_card(
                CardDeclaration::new("Venusian Insects", CardCategory::Project)
                    .with_cost(5)
                    .with_tags([Tag::Venus, Tag::Microbe]),
            )
            .with_card(CardDeclaration::new("Aphrodite", CardCategory::Corporation).with_cost(47));
        Catalog::new(vec![base, venus]).unwrap()
    }

    #[test]
    fn test_disabled_manifest_contributes_nothing() {
        let catalog = catalog();
        let pools = compose(&catalog, &GameSetup::default());
        assert!(pools.contains(&"Capital".into()));
        assert!(!pools.contains(&"Venusian Insects".into()));
        assert!(!pools.contains(&"Aphrodite".into()));
    }

    #[test]
    fn test_incompatibility_removes_card() {
        let catalog = catalog();
        let setup = GameSetup::default().enable(SetupFlag::AresExtension);
        let pools = compose(&catalog, &setup);
        assert!(!pools.contains(&"Capital".into()));
        assert!(pools.contains(&"Birds".into()));
    }

    #[test]
    fn test_ban_removes_card() {
        let catalog = catalog();
        let pools = compose(&catalog, &GameSetup::default().ban("Birds"));
        assert!(!pools.contains(&"Birds".into()));
        assert!(pools.contains(&"Capital".into()));
    }

    #[test]
    fn test_force_include_skips_gating_only() {
        let catalog = catalog();

        // gated out: include pulls it in
        let pools = compose(&catalog, &GameSetup::default().include("Venusian Insects"));
        assert!(pools.projects.iter().any(|c| c.name.as_str() == "Venusian Insects"));

        // banned: include loses
        let setup = GameSetup::default()
            .include("Venusian Insects")
            .ban("Venusian Insects");
        assert!(!compose(&catalog, &setup).contains(&"Venusian Insects".into()));
    }

    #[test]
    fn test_force_include_ignores_other_categories_and_unknowns() {
        let catalog = catalog();
        let setup = GameSetup::default()
            .include("Aphrodite")
            .include("No Such Card");
        let pools = compose(&catalog, &setup);
        assert!(!pools.projects.iter().any(|c| c.name.as_str() == "Aphrodite"));
        assert!(!pools.contains(&"No Such Card".into()));
    }

    #[test]
    fn test_force_include_does_not_duplicate_natural_member() {
        let catalog = catalog();
        let pools = compose(&catalog, &GameSetup::default().include("Birds"));
        let count = pools
            .projects
            .iter()
            .filter(|c| c.name.as_str() == "Birds")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_first_manifest_wins_duplicate_identity() {
        // same identity in two enabled manifests, same category
        let a = CardManifest::new("a", Gate::Always)
            .with_card(CardDeclaration::new("Potatoes", CardCategory::Project).with_cost(2));
        let b = CardManifest::new("b", Gate::Always)
            .with_card(CardDeclaration::new("Potatoes", CardCategory::Project).with_cost(9));
        let catalog = Catalog::new(vec![a, b]).unwrap();

        let pools = compose(&catalog, &GameSetup::default());
        assert_eq!(pools.projects.len(), 1);
        assert_eq!(pools.projects[0].cost, 2);
    }

    #[test]
    fn test_filtered_first_occurrence_not_resurrected() {
        // First occurrence is gated off; the later duplicate must not
        // sneak the card back in.
        let a = CardManifest::new("a", Gate::Always).with_card(
            CardDeclaration::new("Potatoes", CardCategory::Project)
                .gated_by(Gate::flag(SetupFlag::PromoCardsOption)),
        );
        let b = CardManifest::new("b", Gate::Always)
            .with_card(CardDeclaration::new("Potatoes", CardCategory::Project));
        let catalog = Catalog::new(vec![a, b]).unwrap();

        let pools = compose(&catalog, &GameSetup::default());
        assert!(pools.projects.is_empty());
    }

    #[test]
    fn test_all_flags_off_yields_base_only() {
        let catalog = catalog();
        let pools = compose(&catalog, &GameSetup::default());
        assert_eq!(pools.corporations.len(), 1);
        assert_eq!(pools.projects.len(), 2);
        assert!(pools.preludes.is_empty());
        assert!(pools.ceos.is_empty());
    }
}
