//! Tag aggregation over composed pools.

use rustc_hash::FxHashSet;

use super::pools::ComposedPools;
use crate::cards::{CardCategory, Tag};

/// Pools scanned for tags, in scan order. CEOs carry no gameplay tags in
/// the base rules, so their pool is excluded even when a declaration
/// happens to list tags.
const TAG_SCAN_ORDER: [CardCategory; 4] = [
    CardCategory::Corporation,
    CardCategory::Prelude,
    CardCategory::Project,
    CardCategory::StandardProject,
];

/// Distinct tags present in the pools, ordered by first occurrence.
///
/// Scan order is fixed: Corporation, Prelude, Project, StandardProject
/// pools; within a pool, pool order; within a card, declared tag order.
/// The result is a deterministic function of catalog order and the setup,
/// not alphabetical and not enum order.
#[must_use]
pub fn derive_tags(pools: &ComposedPools<'_>) -> Vec<Tag> {
    let mut seen = FxHashSet::default();
    let mut tags = Vec::new();
    for category in TAG_SCAN_ORDER {
        for card in pools.pool(category) {
            for &tag in &card.tags {
                if seen.insert(tag) {
                    tags.push(tag);
                }
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDeclaration;

    fn pools<'c>() -> ComposedPools<'c> {
        ComposedPools {
            corporations: Vec::new(),
            preludes: Vec::new(),
            projects: Vec::new(),
            standard_projects: Vec::new(),
            ceos: Vec::new(),
        }
    }

    #[test]
    fn test_first_seen_order_with_duplicates() {
        let a = CardDeclaration::new("A", CardCategory::Project)
            .with_tags([Tag::Space, Tag::Building, Tag::Space]);
        let b = CardDeclaration::new("B", CardCategory::Project)
            .with_tags([Tag::Building, Tag::Science]);
        let mut p = pools();
        p.projects = vec![&a, &b];

        assert_eq!(derive_tags(&p), vec![Tag::Space, Tag::Building, Tag::Science]);
    }

    #[test]
    fn test_corporations_scanned_before_projects() {
        let corp = CardDeclaration::new("Thorgate", CardCategory::Corporation)
            .with_tags([Tag::Power]);
        let proj = CardDeclaration::new("Windmills", CardCategory::Project)
            .with_tags([Tag::Power, Tag::Building]);
        let mut p = pools();
        p.corporations = vec![&corp];
        p.projects = vec![&proj];

        assert_eq!(derive_tags(&p), vec![Tag::Power, Tag::Building]);
    }

    #[test]
    fn test_ceo_pool_never_scanned() {
        let ceo = CardDeclaration::new("Floyd", CardCategory::Ceo).with_tags([Tag::Wild]);
        let mut p = pools();
        p.ceos = vec![&ceo];

        assert!(derive_tags(&p).is_empty());
    }

    #[test]
    fn test_empty_pools_empty_tags() {
        assert!(derive_tags(&pools()).is_empty());
    }
}
