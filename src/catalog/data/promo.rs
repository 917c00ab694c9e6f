//! Promo manifest.

use super::{corporation, project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("promo", Gate::flag(SetupFlag::PromoCardsOption))
        .with_cards(corporations())
        .with_cards(projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Factorum", 37, &[Power, Building]),
        corporation("Mons Insurance", 48, &[]),
        corporation("Philares", 47, &[Building]),
        corporation("Recyclon", 38, &[Microbe, Building]),
        corporation("Splice", 48, &[Microbe]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Advertising", 4, &[Earth]),
        project("Asteroid Deflection System", 13, &[Space, Earth, Building]),
        project("Asteroid Hollowing", 16, &[Space]),
        project("Crash Site Cleanup", 4, &[Event]),
        project("Cutting Edge Technology", 12, &[Science]),
        project("Directed Impactors", 8, &[Space]),
        project("Diversity Support", 1, &[Event]),
        project("Dusk Laser Mining", 8, &[Space, Event]),
        project("Field-Capped City", 29, &[City, Plant, Building]),
        project("Imported Nutrients", 14, &[Earth, Space, Event]),
        project("Interplanetary Trade", 27, &[Space]),
        project("Jovian Embassy", 14, &[Jovian, Building]),
        project("Law Suit", 2, &[Earth, Event]),
        project("Magnetic Shield", 24, &[Space]),
        project("Meltworks", 4, &[Building]),
        project("Mohole Lake", 31, &[Building]),
        project("Orbital Cleanup", 14, &[Earth, Space]),
        project("Potatoes", 2, &[Plant]),
        project("Project Inspection", 0, &[Event]),
        project("Rego Plastics", 10, &[Building]),
        project("Saturn Surfing", 13, &[Jovian, Earth, Event]),
        project("Self-Replicating Robots", 7, &[]),
        project("Small Asteroid", 10, &[Space, Event]),
        project("Snow Algae", 12, &[Plant]),
        project("Stanford Torus", 12, &[Space, City]),
    ]
}
