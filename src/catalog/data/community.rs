//! Community (fan-made) manifest.
//!
//! Community preludes still need the prelude extension itself, and the
//! community CEOs need the CEO extension; both ride on card gates since
//! the manifest activates on the community option alone.

use super::{ceo, corporation, prelude_card};
use crate::cards::{CardDeclaration, Gate};
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("community", Gate::flag(SetupFlag::CommunityCardsOption))
        .with_cards(corporations())
        .with_cards(preludes())
        .with_cards(ceos())
}

fn corporations() -> Vec<CardDeclaration> {
    vec![
        corporation("Agricola", 40, &[Plant]),
        corporation("Curiosity II", 40, &[Science, Building]),
        corporation("Incite", 32, &[Science])
            .gated_by(Gate::flag(SetupFlag::TurmoilExtension)),
        corporation("Midas", 120, &[]),
        corporation("Playwrights", 38, &[Power]),
        corporation("Project Workshop", 35, &[Wild]),
        corporation("United Nations Mission One", 40, &[Earth]),
    ]
}

fn preludes() -> Vec<CardDeclaration> {
    vec![
        prelude_card("Aerospace Mission", &[Space])
            .gated_by(Gate::flag(SetupFlag::PreludeExtension)),
        prelude_card("By-Election", &[Wild])
            .gated_by(Gate::all([SetupFlag::PreludeExtension, SetupFlag::TurmoilExtension])),
        prelude_card("Double Down", &[])
            .gated_by(Gate::flag(SetupFlag::PreludeExtension)),
        prelude_card("Executive Order", &[Wild])
            .gated_by(Gate::all([SetupFlag::PreludeExtension, SetupFlag::TurmoilExtension])),
        prelude_card("Research Grant", &[Science])
            .gated_by(Gate::flag(SetupFlag::PreludeExtension)),
        prelude_card("Trade Advance", &[Earth])
            .gated_by(Gate::flag(SetupFlag::PreludeExtension)),
        prelude_card("Valuable Gases", &[Venus])
            .gated_by(Gate::all([SetupFlag::PreludeExtension, SetupFlag::VenusNextExtension])),
        prelude_card("Venus First", &[Venus])
            .gated_by(Gate::all([SetupFlag::PreludeExtension, SetupFlag::VenusNextExtension])),
    ]
}

fn ceos() -> Vec<CardDeclaration> {
    vec![
        ceo("Apollo").gated_by(Gate::all([SetupFlag::CeoExtension, SetupFlag::MoonExpansion])),
        ceo("Caesar").gated_by(Gate::all([SetupFlag::CeoExtension, SetupFlag::AresExtension])),
    ]
}
