//! Prelude manifest.
//!
//! Merger hands out a second corporation, so it never appears when the
//! two-corporations variant is already in force.

use super::{corporation, prelude_card, project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("prelude", Gate::flag(SetupFlag::PreludeExtension))
        .with_cards(corporations())
        .with_cards(preludes())
        .with_cards(projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Cheung Shing Mars", 44, &[Building]),
        corporation("Point Luna", 38, &[Earth, Space]),
        corporation("Robinson Industries", 47, &[]),
        corporation("Valley Trust", 37, &[Earth]),
        corporation("Vitor", 45, &[Earth]),
    ]
}

fn preludes() -> Vec<crate::cards::CardDeclaration> {
    vec![
        prelude_card("Acquired Space Agency", &[]),
        prelude_card("Allied Bank", &[Earth]),
        prelude_card("Aquifer Turbines", &[Power]),
        prelude_card("Biofuels", &[Microbe]),
        prelude_card("Biolab", &[Science]),
        prelude_card("Biosphere Support", &[Plant]),
        prelude_card("Business Empire", &[Earth]),
        prelude_card("Dome Farming", &[Plant, Building]),
        prelude_card("Donation", &[]),
        prelude_card("Early Settlement", &[Building, City]),
        prelude_card("Eccentric Sponsor", &[]),
        prelude_card("Ecology Experts", &[Plant, Microbe]),
        prelude_card("Experimental Forest", &[Plant]),
        prelude_card("Galilean Mining", &[Jovian]),
        prelude_card("Great Aquifer", &[]),
        prelude_card("Huge Asteroid", &[]),
        prelude_card("Io Research Outpost", &[Jovian, Science]),
        prelude_card("Loan", &[]),
        prelude_card("Martian Industries", &[Building]),
        prelude_card("Merger", &[]).incompatible_with(SetupFlag::TwoCorpsVariant),
        prelude_card("Metal-Rich Asteroid", &[]),
        prelude_card("Metals Company", &[]),
        prelude_card("Mining Operations", &[Building]),
        prelude_card("Mohole", &[Building]),
        prelude_card("Mohole Excavation", &[Building]),
        prelude_card("Nitrogen Shipment", &[]),
        prelude_card("Orbital Construction Yard", &[Space]),
        prelude_card("Polar Industries", &[Building]),
        prelude_card("Power Generation", &[Power]),
        prelude_card("Research Network", &[Wild]),
        prelude_card("Self-Sufficient Settlement", &[Building, City]),
        prelude_card("Smelting Plant", &[Building]),
        prelude_card("Society Support", &[]),
        prelude_card("Supplier", &[Power]),
        prelude_card("Supply Drop", &[]),
        prelude_card("UNMI Contractor", &[Earth]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("House Printing", 10, &[Building]),
        project("Lava Tube Settlement", 15, &[City, Building]),
        project("Martian Survey", 9, &[Science, Event]),
        project("Psychrophiles", 2, &[Microbe]),
        project("SF Memorial", 7, &[Building]),
        project("Space Hotels", 12, &[Earth, Space]),
    ]
}
