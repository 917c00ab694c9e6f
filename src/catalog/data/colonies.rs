//! Colonies manifest.

use super::{corporation, project, standard_project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("colonies", Gate::flag(SetupFlag::ColoniesExtension))
        .with_cards(corporations())
        .with_cards(projects())
        .with_card(standard_project("Build Colony:SP", 17))
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Aridor", 40, &[]),
        corporation("Arklight", 45, &[Animal]),
        corporation("Polyphemos", 50, &[]),
        corporation("Poseidon", 45, &[]),
        corporation("Stormcraft Incorporated", 48, &[Jovian]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Airliners", 11, &[]),
        project("Air Raid", 0, &[Event]),
        project("Atmo Collectors", 15, &[]),
        project("Community Services", 13, &[]),
        project("Conscription", 5, &[Earth, Event]),
        project("Corona Extractor", 10, &[Space, Power]),
        project("Cryo-Sleep", 10, &[Science]),
        project("Earth Elevator", 43, &[Earth, Space]),
        project("Ecology Research", 21, &[Science, Plant, Animal, Microbe]),
        project("Floater Leasing", 3, &[]),
        project("Floater Prototypes", 2, &[Science, Event]),
        project("Floater Technology", 7, &[Science]),
        project("Galilean Waystation", 15, &[Space]),
        project("Heavy Taxation", 3, &[Earth, Event]),
        project("Ice Moon Colony", 23, &[Space]),
        project("Impactor Swarm", 11, &[Space, Event]),
        project("Interplanetary Colony Ship", 12, &[Earth, Space, Event]),
        project("Jovian Lanterns", 20, &[Jovian]),
        project("Jupiter Floating Station", 9, &[Jovian]),
        project("Luna Governor", 4, &[Earth, Earth]),
        project("Lunar Exports", 19, &[Earth, Space]),
        project("Market Manipulation", 1, &[Earth, Event]),
        project("Martian Zoo", 12, &[Animal, Building]),
        project("Mining Colony", 20, &[Space]),
        project("Minority Refuge", 5, &[Space]),
        project("Molecular Printing", 11, &[Science]),
        project("Nitrogen From Titan", 25, &[Jovian, Space]),
        project("Pioneer Settlement", 13, &[Space]),
        project("Quantum Communications", 8, &[Science]),
        project("Red Spot Observatory", 17, &[Jovian, Science]),
        project("Refugee Camps", 10, &[Earth]),
        project("Research Colony", 20, &[Space, Science]),
        project("Rim Freighters", 4, &[Space]),
        project("Sky Docks", 18, &[Earth, Space]),
        project("Solar Probe", 9, &[Space, Science, Event]),
        project("Solar Reflectors", 23, &[Space]),
        project("Space Port", 22, &[City, Building]),
        project("Spin-Off Department", 10, &[Building]),
        project("Sub-Zero Salt Fish", 5, &[Animal]),
        project("Titan Air-Scrapping", 21, &[Jovian]),
        project("Titan Floating Launch-Pad", 18, &[Jovian]),
        project("Titan Shuttles", 23, &[Jovian, Space]),
        project("Trade Envoys", 6, &[]),
        project("Trading Colony", 18, &[Space]),
        project("Urban Decomposers", 6, &[Microbe, Building]),
        project("Warp Drive", 14, &[Science]),
    ]
}
