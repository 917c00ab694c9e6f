//! Eligibility gates.
//!
//! A `Gate` is a composable predicate over the setup flags. Card
//! declarations use gates for their expansion requirements, and manifests
//! use them for activation. Evaluating a gate never touches anything but
//! the `GameSetup` passed in, so eligibility checks stay uniform across
//! the whole engine instead of being scattered conditionals.

use serde::{Deserialize, Serialize};

use crate::setup::{GameSetup, SetupFlag};

/// Composable eligibility predicate over setup flags.
///
/// ## Example
///
/// ```
/// use cardpool::{Gate, GameSetup, SetupFlag};
///
/// let gate = Gate::all([SetupFlag::CeoExtension, SetupFlag::PreludeExtension]);
///
/// let setup = GameSetup::default().enable(SetupFlag::CeoExtension);
/// assert!(!gate.holds(&setup));
///
/// let setup = setup.enable(SetupFlag::PreludeExtension);
/// assert!(gate.holds(&setup));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    /// Always eligible (base content).
    Always,
    /// Eligible when a single flag is enabled.
    Flag(SetupFlag),
    /// Eligible when every inner gate holds. Empty conjunction holds.
    AllOf(Vec<Gate>),
    /// Eligible when at least one inner gate holds. Empty disjunction fails.
    AnyOf(Vec<Gate>),
}

impl Gate {
    /// Gate on a single flag.
    #[must_use]
    pub fn flag(flag: SetupFlag) -> Self {
        Gate::Flag(flag)
    }

    /// Conjunction of flags.
    #[must_use]
    pub fn all(flags: impl IntoIterator<Item = SetupFlag>) -> Self {
        Gate::AllOf(flags.into_iter().map(Gate::Flag).collect())
    }

    /// Disjunction of flags.
    #[must_use]
    pub fn any(flags: impl IntoIterator<Item = SetupFlag>) -> Self {
        Gate::AnyOf(flags.into_iter().map(Gate::Flag).collect())
    }

    /// Evaluate the gate against a setup.
    #[must_use]
    pub fn holds(&self, setup: &GameSetup) -> bool {
        match self {
            Gate::Always => true,
            Gate::Flag(flag) => setup.is_enabled(*flag),
            Gate::AllOf(gates) => gates.iter().all(|g| g.holds(setup)),
            Gate::AnyOf(gates) => gates.iter().any(|g| g.holds(setup)),
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Gate::Always
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_holds() {
        assert!(Gate::Always.holds(&GameSetup::default()));
    }

    #[test]
    fn test_single_flag() {
        let gate = Gate::flag(SetupFlag::VenusNextExtension);
        assert!(!gate.holds(&GameSetup::default()));
        let setup = GameSetup::default().enable(SetupFlag::VenusNextExtension);
        assert!(gate.holds(&setup));
    }

    #[test]
    fn test_conjunction() {
        let gate = Gate::all([SetupFlag::CeoExtension, SetupFlag::MoonExpansion]);
        let setup = GameSetup::default().enable(SetupFlag::CeoExtension);
        assert!(!gate.holds(&setup));
        assert!(gate.holds(&setup.clone().enable(SetupFlag::MoonExpansion)));
    }

    #[test]
    fn test_disjunction() {
        let gate = Gate::any([SetupFlag::VenusNextExtension, SetupFlag::PathfindersExpansion]);
        assert!(!gate.holds(&GameSetup::default()));
        assert!(gate.holds(&GameSetup::default().enable(SetupFlag::PathfindersExpansion)));
    }

    #[test]
    fn test_nested_gates() {
        // moon, or (ceo and community)
        let gate = Gate::AnyOf(vec![
            Gate::flag(SetupFlag::MoonExpansion),
            Gate::all([SetupFlag::CeoExtension, SetupFlag::CommunityCardsOption]),
        ]);
        assert!(gate.holds(&GameSetup::default().enable(SetupFlag::MoonExpansion)));
        assert!(!gate.holds(&GameSetup::default().enable(SetupFlag::CeoExtension)));
    }

    #[test]
    fn test_empty_conjunction_and_disjunction() {
        let setup = GameSetup::default();
        assert!(Gate::AllOf(Vec::new()).holds(&setup));
        assert!(!Gate::AnyOf(Vec::new()).holds(&setup));
    }
}
