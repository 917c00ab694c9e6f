//! Base game manifest: always active.

use super::{corporation, project, standard_project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("base", Gate::Always)
        .with_cards(corporations())
        .with_cards(projects())
        .with_cards(standard_projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Credicor", 57, &[]),
        corporation("Ecoline", 36, &[Plant]),
        corporation("Helion", 42, &[Space]),
        corporation("Interplanetary Cinematics", 30, &[Building]),
        corporation("Inventrix", 45, &[Science]),
        corporation("Mining Guild", 30, &[Building, Building]),
        corporation("Phobolog", 23, &[Space]),
        corporation("Tharsis Republic", 40, &[Building]),
        corporation("Thorgate", 48, &[Power]),
        corporation("United Nations Mars Initiative", 40, &[Earth]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Adapted Lichen", 9, &[Plant]),
        project("Advanced Ecosystems", 11, &[Plant, Microbe, Animal]),
        project("Aerobraked Ammonia Asteroid", 26, &[Space, Event]),
        project("Algae", 10, &[Plant]),
        project("Ants", 9, &[Microbe]),
        project("Aquifer Pumping", 18, &[Building]),
        project("Archaebacteria", 6, &[Microbe]),
        project("Arctic Algae", 12, &[Plant]),
        project("Artificial Lake", 15, &[Building]),
        project("Artificial Photosynthesis", 12, &[Science]),
        project("Asteroid", 14, &[Space, Event]),
        project("Asteroid Mining", 30, &[Jovian, Space]),
        project("Beam From A Thorium Asteroid", 32, &[Jovian, Space, Power]),
        project("Big Asteroid", 27, &[Space, Event]),
        project("Biomass Combustors", 4, &[Power, Building]),
        project("Birds", 10, &[Animal]),
        project("Black Polar Dust", 15, &[]),
        project("Breathing Filters", 11, &[Science]),
        project("Bushes", 10, &[Plant]),
        project("Callisto Penal Mines", 24, &[Jovian, Space]),
        project("Capital", 26, &[City, Building]).incompatible_with(SetupFlag::AresExtension),
        project("Carbonate Processing", 6, &[Building]),
        project("Cloud Seeding", 11, &[]),
        project("Colonizer Training Camp", 8, &[Jovian, Building]),
        project("Comet", 21, &[Space, Event]),
        project("Commercial District", 16, &[Building]),
        project("Convoy From Europa", 15, &[Space, Event]),
        project("Cupola City", 16, &[City, Building]),
        project("Decomposers", 5, &[Microbe]),
        project("Deep Well Heating", 13, &[Power, Building]),
        project("Deimos Down", 31, &[Space, Event]),
        project("Designed Microorganisms", 16, &[Science, Microbe]),
        project("Domed Crater", 24, &[City, Building]),
        project("Dust Seals", 2, &[]),
        project("Ecological Zone", 12, &[Animal, Plant]),
        project("Energy Saving", 15, &[Power]),
        project("Eos Chasma National Park", 16, &[Plant, Building]),
        project("Equatorial Magnetizer", 11, &[Building]),
        project("Extreme-Cold Fungus", 13, &[Microbe]),
        project("Farming", 16, &[Plant, Building]),
        project("Fish", 9, &[Animal]),
        project("Flooding", 7, &[Event]),
        project("Food Factory", 12, &[Building]),
        project("Fuel Factory", 6, &[Building]),
        project("Fueled Generators", 1, &[Power, Building]),
        project("Fusion Power", 14, &[Science, Power, Building]),
        project("Ganymede Colony", 20, &[Jovian, Space, City]),
        project("Gene Repair", 12, &[Science]),
        project("Geothermal Power", 11, &[Power, Building]),
        project("GHG Factories", 11, &[Building]),
        project("GHG Producing Bacteria", 8, &[Science, Microbe]),
        project("Giant Ice Asteroid", 36, &[Space, Event]),
        project("Giant Space Mirror", 17, &[Power, Space]),
        project("Grass", 11, &[Plant]),
        project("Great Dam", 12, &[Power, Building]),
        project("Great Escarpment Consortium", 6, &[]),
        project("Greenhouses", 6, &[Plant, Building]),
        project("Heat Trappers", 6, &[Power, Building]),
        project("Heather", 6, &[Plant]),
        project("Herbivores", 12, &[Animal]),
        project("Ice Asteroid", 23, &[Space, Event]),
        project("Ice Cap Melting", 5, &[Event]),
        project("Immigrant City", 13, &[City, Building]),
        project("Immigration Shuttles", 31, &[Earth, Space]),
        project("Import Of Advanced GHG", 9, &[Earth, Space, Event]),
        project("Imported GHG", 7, &[Earth, Space, Event]),
        project("Imported Hydrogen", 16, &[Earth, Space, Event]),
        project("Imported Nitrogen", 23, &[Earth, Space, Event]),
        project("Industrial Microbes", 12, &[Microbe, Building]),
        project("Insects", 9, &[Microbe]),
        project("Insulation", 2, &[]),
        project("Interstellar Colony Ship", 24, &[Earth, Space, Event]),
        project("Ironworks", 11, &[Building]),
        project("Kelp Farming", 17, &[Plant]),
        project("Lake Marineris", 18, &[]),
        project("Land Claim", 1, &[Event]),
        project("Large Convoy", 36, &[Earth, Space, Event]),
        project("Lava Flows", 18, &[Event]),
        project("Lichen", 7, &[Plant]),
        project("Lightning Harvest", 8, &[Power]),
        project("Livestock", 13, &[Animal]),
        project("Local Heat Trapping", 1, &[Event]),
        project("Lunar Beam", 13, &[Earth, Power]),
        project("Magnetic Field Dome", 5, &[Building]),
        project("Magnetic Field Generators", 20, &[Building]),
        project("Mangrove", 12, &[Plant]),
        project("Mars University", 8, &[Science, Building]),
        project("Martian Rails", 13, &[Building]),
        project("Methane From Titan", 28, &[Jovian, Space]),
        project("Micro-Mills", 3, &[]),
        project("Mine", 4, &[Building]),
        project("Mineral Deposit", 5, &[Event]),
        project("Mining Area", 4, &[Building]),
        project("Mining Expedition", 12, &[Event]),
        project("Mining Rights", 9, &[Building]),
        project("Mohole Area", 20, &[Building]),
        project("Moss", 4, &[Plant]),
        project("Natural Preserve", 9, &[Science, Building]),
        project("Nitrite Reducing Bacteria", 11, &[Microbe]),
        project("Nitrogen-Rich Asteroid", 31, &[Space, Event]),
        project("Nitrophilic Moss", 8, &[Plant]),
        project("Noctis City", 18, &[City, Building]),
        project("Noctis Farming", 10, &[Plant, Building]),
        project("Nuclear Power", 10, &[Power, Building]),
        project("Nuclear Zone", 10, &[Earth]),
        project("Open City", 23, &[City, Building]),
        project("Optimal Aerobraking", 7, &[Space, Event]),
        project("Ore Processor", 13, &[Building]),
        project("Permafrost Extraction", 8, &[Event]),
        project("Peroxide Power", 7, &[Power, Building]),
        project("Pets", 10, &[Earth, Animal]),
        project("Phobos Space Haven", 25, &[Space, City]),
        project("Plantation", 15, &[Plant]),
        project("Power Grid", 18, &[Power]),
        project("Power Plant", 4, &[Power, Building]),
        project("Power Supply Consortium", 5, &[Power]),
        project("Predators", 14, &[Animal]),
        project("Protected Habitats", 5, &[]),
        project("Protected Valley", 23, &[Plant, Building]),
        project("Rad-Chem Factory", 8, &[Building]),
        project("Regolith Eaters", 13, &[Science, Microbe]),
        project("Release Of Inert Gases", 14, &[Event]),
        project("Research", 11, &[Science, Science]),
        project("Research Outpost", 18, &[Science, City, Building]),
        project("Robotic Workforce", 9, &[Science]),
        project("Search For Life", 3, &[Science]),
        project("Small Animals", 6, &[Animal]),
        project("Soil Factory", 9, &[Building]),
        project("Solar Power", 11, &[Power, Building]),
        project("Solar Wind Power", 11, &[Science, Space, Power]),
        project("Soletta", 35, &[Space]),
        project("Space Mirrors", 3, &[Power, Space]),
        project("Steelworks", 15, &[Building]),
        project("Strip Mine", 25, &[Building]),
        project("Subterranean Reservoir", 11, &[Event]),
        project("Symbiotic Fungus", 4, &[Microbe]),
        project("Tardigrades", 4, &[Microbe]),
    ]
}

fn standard_projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        standard_project("Sell Patents:SP", 0),
        standard_project("Power Plant:SP", 11),
        standard_project("Asteroid:SP", 14),
        standard_project("Aquifer:SP", 18),
        standard_project("Greenery:SP", 23),
        standard_project("City:SP", 25),
    ]
}
