//! Ares manifest.
//!
//! Ares ships its own hazard-aware Capital; the base Capital carries the
//! matching incompatibility and drops out whenever Ares is in play.

use super::{corporation, project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("ares", Gate::flag(SetupFlag::AresExtension))
        .with_card(corporation("Arcadian Communities", 40, &[]))
        .with_cards(projects())
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Bioengineering Enclosure", 7, &[Animal, Building]),
        project("Biofertilizer Facility", 12, &[Plant, Microbe, Building]),
        project("Butterfly Effect", 10, &[]),
        project("Capital:ares", 26, &[City, Building]),
        project("Desperate Measures", 1, &[Event]),
        project("Ecological Survey", 9, &[]),
        project("Geological Survey", 8, &[]),
        project("Kickstarter", 2, &[Earth, Event]),
        project("Marketing Experts", 5, &[Earth]),
        project("Metallic Asteroid", 13, &[Space, Event]),
        project("Ocean City", 18, &[City, Building]),
        project("Ocean Farm", 15, &[Plant, Building]),
        project("Ocean Sanctuary", 9, &[Animal]),
        project("Solar Farm", 12, &[Power, Building]),
    ]
}
