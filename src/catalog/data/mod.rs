//! Compiled-in standard catalog data.
//!
//! One module per expansion manifest. The data is declaration-only: what
//! each card *does* when played lives outside this crate, so an entry is
//! just identity, cost, tags, and gating. Manifest order here is catalog
//! order, which fixes pool order and the derived tag order.

mod ares;
mod base;
mod ceos;
mod colonies;
mod community;
mod corporate_era;
mod moon;
mod pathfinders;
mod prelude;
mod promo;
mod turmoil;
mod venus;

use crate::cards::{CardCategory, CardDeclaration, Tag};
use crate::catalog::CardManifest;

/// Every standard manifest, in catalog order.
pub fn standard_manifests() -> Vec<CardManifest> {
    vec![
        base::manifest(),
        corporate_era::manifest(),
        prelude::manifest(),
        venus::manifest(),
        colonies::manifest(),
        turmoil::manifest(),
        promo::manifest(),
        ares::manifest(),
        moon::manifest(),
        pathfinders::manifest(),
        ceos::manifest(),
        community::manifest(),
    ]
}

fn corporation(name: &str, starting_credits: u32, tags: &[Tag]) -> CardDeclaration {
    CardDeclaration::new(name, CardCategory::Corporation)
        .with_cost(starting_credits)
        .with_tags(tags.iter().copied())
}

fn prelude_card(name: &str, tags: &[Tag]) -> CardDeclaration {
    CardDeclaration::new(name, CardCategory::Prelude).with_tags(tags.iter().copied())
}

fn project(name: &str, cost: u32, tags: &[Tag]) -> CardDeclaration {
    CardDeclaration::new(name, CardCategory::Project)
        .with_cost(cost)
        .with_tags(tags.iter().copied())
}

fn standard_project(name: &str, cost: u32) -> CardDeclaration {
    CardDeclaration::new(name, CardCategory::StandardProject).with_cost(cost)
}

fn ceo(name: &str) -> CardDeclaration {
    CardDeclaration::new(name, CardCategory::Ceo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_manifests_validate() {
        let catalog = crate::catalog::Catalog::new(standard_manifests()).unwrap();
        assert!(catalog.len() > 400);
    }

    #[test]
    fn test_base_manifest_is_always_active() {
        let manifests = standard_manifests();
        assert_eq!(manifests[0].name(), "base");
        assert!(manifests[0].enabled_for(&crate::setup::GameSetup::default()));
    }

    #[test]
    fn test_expected_deck_sizes() {
        let manifests = standard_manifests();
        let base = &manifests[0];
        let corp_era = &manifests[1];
        assert_eq!(base.cards_of(CardCategory::Project).len(), 137);
        assert_eq!(corp_era.cards_of(CardCategory::Project).len(), 71);
    }
}
