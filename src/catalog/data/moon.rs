//! The Moon manifest.

use super::{corporation, project, standard_project};
use crate::cards::Gate;
use crate::cards::Tag::*;
use crate::catalog::CardManifest;
use crate::setup::SetupFlag;

pub fn manifest() -> CardManifest {
    CardManifest::new("the moon", Gate::flag(SetupFlag::MoonExpansion))
        .with_cards(corporations())
        .with_cards(projects())
        .with_cards(standard_projects())
}

fn corporations() -> Vec<crate::cards::CardDeclaration> {
    vec![
        corporation("Luna First Incorporated", 45, &[Moon]),
        corporation("Luna Hyperloop Corporation", 48, &[Moon, Building]),
        corporation("Luna Trade Federation", 50, &[Moon]),
        corporation("Nanotech Industries", 45, &[Science]),
        corporation("The Darkside Of The Moon Syndicate", 40, &[Moon]),
    ]
}

fn projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        project("Ancient Shipyards", 6, &[Moon, Space]),
        project("Copernicus Tower", 36, &[Moon, Science]),
        project("Darkside Observatory", 12, &[Moon, Science]),
        project("Deep Lunar Mining", 30, &[Moon, Building]),
        project("He3 Fusion Plant", 17, &[Moon, Power]),
        project("Luna Trade Station", 28, &[Moon, Space]),
        project("Lunar Dust Processing Plant", 12, &[Moon, Building]),
        project("Lunar Mine Urbanization", 17, &[Moon, City]),
        project("Mare Imbrium Mine", 19, &[Moon, Building]),
        project("Mare Nectaris Mine", 14, &[Moon, Building]),
        project("Mare Nubium Mine", 17, &[Moon, Building]),
        project("Mare Serenitatis Mine", 21, &[Moon, Building]),
        project("Momentum Virium Habitat", 39, &[Moon, City]),
        project("Moon Tether", 18, &[Moon, Space]),
        project("Sinus Iridium Road Network", 15, &[Moon, Building]),
        project("Tycho Road Network", 13, &[Moon, Building]),
    ]
}

fn standard_projects() -> Vec<crate::cards::CardDeclaration> {
    vec![
        standard_project("Moon Habitat:SP", 22),
        standard_project("Moon Mine:SP", 20),
        standard_project("Moon Road:SP", 18),
    ]
}
