//! Expansion and variant flags.

use serde::{Deserialize, Serialize};

/// One expansion or house-rule variant toggle.
///
/// Gates and incompatibility lists name flags through this enum so the
/// engine can evaluate eligibility uniformly; the `GameSetup` record is
/// the ground truth each flag is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupFlag {
    CorporateEra,
    PreludeExtension,
    VenusNextExtension,
    ColoniesExtension,
    TurmoilExtension,
    PromoCardsOption,
    AresExtension,
    MoonExpansion,
    PathfindersExpansion,
    CeoExtension,
    CommunityCardsOption,
    TwoCorpsVariant,
}

impl SetupFlag {
    /// Every flag, in declaration order.
    pub const ALL: [SetupFlag; 12] = [
        SetupFlag::CorporateEra,
        SetupFlag::PreludeExtension,
        SetupFlag::VenusNextExtension,
        SetupFlag::ColoniesExtension,
        SetupFlag::TurmoilExtension,
        SetupFlag::PromoCardsOption,
        SetupFlag::AresExtension,
        SetupFlag::MoonExpansion,
        SetupFlag::PathfindersExpansion,
        SetupFlag::CeoExtension,
        SetupFlag::CommunityCardsOption,
        SetupFlag::TwoCorpsVariant,
    ];
}
