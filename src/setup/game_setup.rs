//! Game setup - the configuration one session composes against.
//!
//! A `GameSetup` is a flat record: one boolean per expansion/variant flag
//! plus the two override lists. It carries no behavior beyond being read.
//! Callers hand the engine a fully-populated setup; nothing is defaulted
//! here beyond `Default` meaning "base game only, no overrides".

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::flags::SetupFlag;
use crate::cards::CardName;

/// Expansion/variant flags and override lists for one game session.
///
/// `banned_cards` and `included_cards` are expected to be disjoint; the
/// engine does not validate this and resolves an overlap in favor of the
/// ban.
///
/// ## Example
///
/// ```
/// use cardpool::{GameSetup, SetupFlag};
///
/// let setup = GameSetup::default()
///     .enable(SetupFlag::CorporateEra)
///     .enable(SetupFlag::PreludeExtension)
///     .ban("Merger");
///
/// assert!(setup.is_enabled(SetupFlag::CorporateEra));
/// assert!(setup.is_banned(&"Merger".into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSetup {
    pub corporate_era: bool,
    pub prelude_extension: bool,
    pub venus_next_extension: bool,
    pub colonies_extension: bool,
    pub turmoil_extension: bool,
    pub promo_cards_option: bool,
    pub ares_extension: bool,
    pub moon_expansion: bool,
    pub pathfinders_expansion: bool,
    pub ceo_extension: bool,
    pub community_cards_option: bool,
    pub two_corps_variant: bool,

    /// Identities that must appear in no pool.
    pub banned_cards: FxHashSet<CardName>,

    /// Project identities to pull in past expansion gating. Identities of
    /// other categories, or unknown identities, are ignored.
    pub included_cards: FxHashSet<CardName>,
}

impl GameSetup {
    /// Read one flag.
    #[must_use]
    pub fn is_enabled(&self, flag: SetupFlag) -> bool {
        match flag {
            SetupFlag::CorporateEra => self.corporate_era,
            SetupFlag::PreludeExtension => self.prelude_extension,
            SetupFlag::VenusNextExtension => self.venus_next_extension,
            SetupFlag::ColoniesExtension => self.colonies_extension,
            SetupFlag::TurmoilExtension => self.turmoil_extension,
            SetupFlag::PromoCardsOption => self.promo_cards_option,
            SetupFlag::AresExtension => self.ares_extension,
            SetupFlag::MoonExpansion => self.moon_expansion,
            SetupFlag::PathfindersExpansion => self.pathfinders_expansion,
            SetupFlag::CeoExtension => self.ceo_extension,
            SetupFlag::CommunityCardsOption => self.community_cards_option,
            SetupFlag::TwoCorpsVariant => self.two_corps_variant,
        }
    }

    /// Write one flag.
    pub fn set(&mut self, flag: SetupFlag, enabled: bool) {
        match flag {
            SetupFlag::CorporateEra => self.corporate_era = enabled,
            SetupFlag::PreludeExtension => self.prelude_extension = enabled,
            SetupFlag::VenusNextExtension => self.venus_next_extension = enabled,
            SetupFlag::ColoniesExtension => self.colonies_extension = enabled,
            SetupFlag::TurmoilExtension => self.turmoil_extension = enabled,
            SetupFlag::PromoCardsOption => self.promo_cards_option = enabled,
            SetupFlag::AresExtension => self.ares_extension = enabled,
            SetupFlag::MoonExpansion => self.moon_expansion = enabled,
            SetupFlag::PathfindersExpansion => self.pathfinders_expansion = enabled,
            SetupFlag::CeoExtension => self.ceo_extension = enabled,
            SetupFlag::CommunityCardsOption => self.community_cards_option = enabled,
            SetupFlag::TwoCorpsVariant => self.two_corps_variant = enabled,
        }
    }

    /// Enable a flag (builder pattern).
    #[must_use]
    pub fn enable(mut self, flag: SetupFlag) -> Self {
        self.set(flag, true);
        self
    }

    /// Ban an identity (builder pattern).
    #[must_use]
    pub fn ban(mut self, name: impl Into<CardName>) -> Self {
        self.banned_cards.insert(name.into());
        self
    }

    /// Force-include an identity (builder pattern).
    #[must_use]
    pub fn include(mut self, name: impl Into<CardName>) -> Self {
        self.included_cards.insert(name.into());
        self
    }

    #[must_use]
    pub fn is_banned(&self, name: &CardName) -> bool {
        self.banned_cards.contains(name)
    }

    #[must_use]
    pub fn is_included(&self, name: &CardName) -> bool {
        self.included_cards.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_base_game() {
        let setup = GameSetup::default();
        for flag in SetupFlag::ALL {
            assert!(!setup.is_enabled(flag), "{flag:?} should default to off");
        }
        assert!(setup.banned_cards.is_empty());
        assert!(setup.included_cards.is_empty());
    }

    #[test]
    fn test_set_and_read_every_flag() {
        for flag in SetupFlag::ALL {
            let mut setup = GameSetup::default();
            setup.set(flag, true);
            assert!(setup.is_enabled(flag));
            for other in SetupFlag::ALL {
                if other != flag {
                    assert!(!setup.is_enabled(other));
                }
            }
            setup.set(flag, false);
            assert!(!setup.is_enabled(flag));
        }
    }

    #[test]
    fn test_overrides() {
        let setup = GameSetup::default().ban("Capital").include("Venusian Insects");
        assert!(setup.is_banned(&"Capital".into()));
        assert!(!setup.is_banned(&"Birds".into()));
        assert!(setup.is_included(&"Venusian Insects".into()));
    }

    #[test]
    fn test_serde_partial_input() {
        // User-edited setup files may omit fields; everything defaults.
        let setup: GameSetup =
            serde_json::from_str(r#"{"corporate_era": true, "banned_cards": ["Sabotage"]}"#)
                .unwrap();
        assert!(setup.corporate_era);
        assert!(!setup.prelude_extension);
        assert!(setup.is_banned(&"Sabotage".into()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let setup = GameSetup::default()
            .enable(SetupFlag::TurmoilExtension)
            .include("Dawn City");
        let json = serde_json::to_string(&setup).unwrap();
        let back: GameSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, setup);
    }
}
