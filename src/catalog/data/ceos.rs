//! CEO manifest.
//!
//! Manifest activation only requires the CEO extension; CEOs tied to a
//! specific expansion carry that requirement on their own gate, so a CEO
//! needing two flags at once is expressed per card rather than by
//! splitting the manifest.

use super::ceo;
use crate::cards::{CardDeclaration, Gate};
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("ceos", Gate::flag(SetupFlag::CeoExtension)).with_cards(ceos())
}

fn ceos() -> Vec<CardDeclaration> {
    vec![
        ceo("Asimov"),
        ceo("Bjorn"),
        ceo("Duncan"),
        ceo("Ender"),
        ceo("Floyd"),
        ceo("Greta"),
        ceo("HAL 9000"),
        ceo("Ingrid").gated_by(Gate::flag(SetupFlag::AresExtension)),
        ceo("Jansson"),
        ceo("Karen").gated_by(Gate::flag(SetupFlag::PreludeExtension)),
        ceo("Lowell"),
        ceo("Maria").gated_by(Gate::flag(SetupFlag::ColoniesExtension)),
        ceo("Musk").gated_by(Gate::flag(SetupFlag::MoonExpansion)),
        ceo("Naomi").gated_by(Gate::flag(SetupFlag::ColoniesExtension)),
        ceo("Neil").gated_by(Gate::flag(SetupFlag::MoonExpansion)),
        ceo("Oscar").gated_by(Gate::flag(SetupFlag::TurmoilExtension)),
        ceo("Petra").gated_by(Gate::flag(SetupFlag::TurmoilExtension)),
        ceo("Quill").gated_by(Gate::flag(SetupFlag::VenusNextExtension)),
        ceo("Shara").gated_by(Gate::flag(SetupFlag::PathfindersExpansion)),
        ceo("Stefan"),
        ceo("Ulrich"),
        ceo("Vanallen"),
        ceo("Will"),
        ceo("Xavier"),
        ceo("Xu").gated_by(Gate::flag(SetupFlag::VenusNextExtension)),
        ceo("Yvonne").gated_by(Gate::flag(SetupFlag::MoonExpansion)),
        ceo("Zan").gated_by(Gate::flag(SetupFlag::TurmoilExtension)),
    ]
}
