//! Corporate Era manifest.

use super::{corporation, project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("corporate era", Gate::flag(SetupFlag::CorporateEra))
        .with_cards(corporations())
        .with_cards(projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Saturn Systems", 42, &[Jovian]),
        corporation("Teractor", 60, &[Earth]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Acquired Company", 10, &[Earth]),
        project("Adaptation Technology", 12, &[Science]),
        project("Advanced Alloys", 9, &[Science]),
        project("AI Central", 21, &[Science, Building]),
        project("Anti-Gravity Technology", 14, &[Science]),
        project("Asteroid Mining Consortium", 13, &[Jovian]),
        project("Bribed Committee", 7, &[Earth, Event]),
        project("Business Contacts", 7, &[Earth, Event]),
        project("Business Network", 4, &[Earth]),
        project("Caretaker Contract", 3, &[]),
        project("Cartel", 8, &[Earth]),
        project("CEO's Favorite Project", 1, &[Event]),
        project("Commercial Imports", 12, &[Earth, Space]),
        project("Corporate Archives", 15, &[Earth]),
        project("Corporate Stronghold", 11, &[City, Building]),
        project("Development Center", 11, &[Science, Building]),
        project("Earth Catapult", 23, &[Earth]),
        project("Earth Office", 1, &[Earth]),
        project("Electro Catapult", 17, &[Building]),
        project("Energy Tapping", 3, &[Power]),
        project("Hackers", 3, &[]),
        project("Hired Raiders", 1, &[Event]),
        project("Indentured Workers", 0, &[Event]),
        project("Industrial Center", 4, &[Building]),
        project("Invention Contest", 2, &[Science, Event]),
        project("Inventors' Guild", 9, &[Science]),
        project("Investment Loan", 3, &[Earth, Event]),
        project("Io Mining Industries", 41, &[Jovian, Space]),
        project("Lagrange Observatory", 9, &[Science, Space]),
        project("Mass Converter", 8, &[Science, Power]),
        project("Media Archives", 8, &[Earth]),
        project("Media Group", 6, &[Earth]),
        project("Medical Lab", 13, &[Science, Building]),
        project("Miranda Resort", 12, &[Jovian, Space]),
        project("Olympus Conference", 10, &[Science, Earth, Building]),
        project("Orbital Logistics", 7, &[Space]),
        project("Physics Complex", 12, &[Science, Building]),
        project("Power Infrastructure", 4, &[Power, Building]),
        project("Quantum Extractor", 13, &[Science, Power]),
        project("Restricted Area", 11, &[Science]),
        project("Rover Construction", 8, &[Building]),
        project("Sabotage", 1, &[Event]),
        project("Satellites", 10, &[Space]),
        project("Security Fleet", 12, &[Space]),
        project("Shuttles", 10, &[Space]),
        project("Space Elevator", 27, &[Space, Building]),
        project("Space Station", 10, &[Space]),
        project("Special Design", 4, &[Science, Event]),
        project("Sponsors", 6, &[Earth]),
        project("Standard Technology", 6, &[Science]),
        project("Technology Demonstration", 5, &[Science, Space, Event]),
        project("Tectonic Stress Power", 18, &[Science, Power, Building]),
        project("Terraforming Ganymede", 33, &[Jovian, Space]),
        project("Titanium Mine", 7, &[Building]),
        project("Toll Station", 12, &[Space]),
        project("Towing A Comet", 23, &[Space, Event]),
        project("Trans-Neptune Probe", 6, &[Science, Space]),
        project("Trees", 13, &[Plant]),
        project("Tropical Resort", 13, &[Building]),
        project("Tundra Farming", 16, &[Plant]),
        project("Underground City", 18, &[City, Building]),
        project("Underground Detonations", 6, &[Building]),
        project("Urbanized Area", 10, &[City, Building]),
        project("Vesta Shipyard", 15, &[Jovian, Space, Building]),
        project("Viral Enhancers", 9, &[Science, Microbe]),
        project("Virus", 1, &[Microbe, Event]),
        project("Water Import From Europa", 25, &[Jovian, Space]),
        project("Wave Power", 8, &[Power]),
        project("Windmills", 6, &[Power, Building]),
        project("Worms", 8, &[Microbe]),
        project("Zeppelins", 13, &[]),
    ]
}
