//! Venus Next manifest.

use super::{corporation, project, standard_project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("venus next", Gate::flag(SetupFlag::VenusNextExtension))
        .with_cards(corporations())
        .with_cards(projects())
        .with_card(standard_project("Air Scrapping:SP", 15))
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Aphrodite", 47, &[Plant, Venus]),
        corporation("Celestic", 42, &[Venus]),
        corporation("Manutech", 35, &[Building]),
        corporation("Morning Star Inc.", 50, &[Venus]),
        corporation("Viron", 48, &[Microbe]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Aerosport Tournament", 7, &[Venus, Event]),
        project("Air-Scrapping Expedition", 13, &[Venus, Event]),
        project("Atalanta Planitia Lab", 10, &[Venus, Science]),
        project("Atmoscoop", 22, &[Space, Venus]),
        project("Comet For Venus", 11, &[Space, Event]),
        project("Corroder Suits", 8, &[Venus]),
        project("Dawn City", 15, &[Space, City]),
        project("Deuterium Export", 11, &[Venus, Space, Power]),
        project("Dirigibles", 11, &[Venus]),
        project("Extractor Balloons", 21, &[Venus]),
        project("Extremophiles", 3, &[Venus, Microbe]),
        project("Floating Habs", 5, &[Venus]),
        project("Forced Precipitation", 8, &[Venus]),
        project("Freyja Biodomes", 14, &[Venus, Plant]),
        project("Giant Solar Shade", 27, &[Space, Venus]),
        project("Gyropolis", 20, &[City, Building]),
        project("Hydrogen To Venus", 11, &[Space, Event]),
        project("Ishtar Mining", 5, &[Venus]),
        project("Jet Stream Microscrappers", 12, &[Venus]),
        project("Local Shading", 4, &[Venus]),
        project("Luna Metropolis", 21, &[Earth, Space, City]),
        project("Luxury Foods", 8, &[]),
        project("Maxwell Base", 18, &[City, Venus]),
        project("Omnicourt", 11, &[Building]),
        project("Rotator Impacts", 6, &[Space]),
        project("Sister Planet Support", 7, &[Venus, Earth]),
        project("Solarnet", 7, &[]),
        project("Spin-Inducing Asteroid", 16, &[Space, Event]),
        project("Sponsored Academies", 9, &[Earth, Science]),
        project("Stratopolis", 22, &[City, Venus]),
        project("Stratospheric Birds", 12, &[Venus, Animal]),
        project("Sulphur-Eating Bacteria", 6, &[Venus, Microbe]),
        project("Venusian Animals", 15, &[Venus, Animal, Science]),
        project("Venusian Insects", 5, &[Venus, Microbe]),
        project("Venusian Plants", 13, &[Venus, Plant]),
    ]
}
