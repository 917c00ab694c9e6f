//! Pathfinders manifest.

use super::{corporation, project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("pathfinders", Gate::flag(SetupFlag::PathfindersExpansion))
        .with_cards(corporations())
        .with_cards(projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Adhai High Orbit Constructions", 43, &[Space]),
        corporation("Ambient", 42, &[Venus]),
        corporation("Aurorai", 33, &[Mars]),
        corporation("Chimera", 36, &[Wild, Wild]),
        corporation("Polaris", 32, &[Space]),
        corporation("Ringcom", 39, &[Earth]),
        corporation("Robin Haulings", 39, &[Venus, Space]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Anthozoa", 9, &[Plant, Animal]),
        project("Breeding Farms", 9, &[Animal, Building]),
        project("Cassini Station", 23, &[Science, Space]),
        project("Charity Donation", 7, &[Event]),
        project("Crew Training", 8, &[Clone, Clone]),
        project("Cultivation Of Venus", 16, &[Venus, Plant]),
        project("Cyanobacteria", 10, &[Microbe]),
        project("Dust Storm", 8, &[Event]),
        project("Dyson Screens", 28, &[Space, Power, Venus]),
        project("Expedition To The Surface Venus", 12, &[Venus, Space, Event]),
        project("Floater Urbanism", 7, &[Venus, City]),
        project("Martian Culture", 11, &[Mars]),
        project("Martian Monuments", 13, &[Mars, Building]),
        project("Martian Nature Wonders", 13, &[Mars]),
        project("Museum Of Early Colonisation", 12, &[Mars, Building]),
        project("Terraforming Control Station", 18, &[Venus, Space]),
        project("Think Tank", 12, &[Venus, Science]),
        project("Venera Base", 21, &[Venus, City, Building]),
    ]
}
