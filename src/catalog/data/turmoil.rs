//! Turmoil manifest.

use super::{corporation, project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("turmoil", Gate::flag(SetupFlag::TurmoilExtension))
        .with_cards(corporations())
        .with_cards(projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Lakefront Resorts", 54, &[Building]),
        corporation("Pristar", 53, &[]),
        corporation("Septem Tribus", 36, &[Wild]),
        corporation("Terralabs Research", 14, &[Science, Earth]),
        corporation("Utopia Invest", 40, &[Building]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Aerial Lenses", 2, &[]),
        project("Banned Delegate", 0, &[Event]),
        project("Cultural Metropolis", 20, &[City, Building]),
        project("Diaspora Movement", 7, &[Jovian]),
        project("Event Analysts", 5, &[Science]),
        project("GMO Contract", 3, &[Microbe, Science]),
        project("Martian Media Center", 7, &[Building]),
        project("Parliament Hall", 8, &[Building]),
        project("PR Office", 7, &[Earth]),
        project("Public Celebrations", 8, &[Event]),
        project("Recruitment", 2, &[Event]),
        project("Red Tourism Wave", 3, &[Earth, Event]),
        project("Sponsored Mohole", 5, &[Building]),
        project("Supported Research", 3, &[Science]),
        project("Vote Of No Confidence", 5, &[Event]),
        project("Wildlife Dome", 15, &[Animal, Plant, Building]),
    ]
}
