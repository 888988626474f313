use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// One of the fixed flower-stock categories.
///
/// Serialised and displayed by catalogue name ("Andre Citroen", "First star", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variety {
    #[serde(rename = "Andre Citroen")]
    AndreCitroen,
    #[serde(rename = "Circuit")]
    Circuit,
    #[serde(rename = "First star")]
    FirstStar,
    #[serde(rename = "Laptop")]
    Laptop,
    #[serde(rename = "White Master")]
    WhiteMaster,
    #[serde(rename = "Triple A")]
    TripleA,
    #[serde(rename = "Supemodel")]
    Supemodel,
    #[serde(rename = "Tresor")]
    Tresor,
    #[serde(rename = "Strong Love")]
    StrongLove,
    #[serde(rename = "Strong Gold")]
    StrongGold,
    #[serde(rename = "Respectable")]
    Respectable,
    #[serde(rename = "Montezuma")]
    Montezuma,
    #[serde(rename = "Columbus")]
    Columbus,
    #[serde(rename = "Valdivia")]
    Valdivia,
}

impl Variety {
    /// Every variety, in catalogue order.
    pub const ALL: [Variety; 14] = [
        Variety::AndreCitroen,
        Variety::Circuit,
        Variety::FirstStar,
        Variety::Laptop,
        Variety::WhiteMaster,
        Variety::TripleA,
        Variety::Supemodel,
        Variety::Tresor,
        Variety::StrongLove,
        Variety::StrongGold,
        Variety::Respectable,
        Variety::Montezuma,
        Variety::Columbus,
        Variety::Valdivia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variety::AndreCitroen => "Andre Citroen",
            Variety::Circuit => "Circuit",
            Variety::FirstStar => "First star",
            Variety::Laptop => "Laptop",
            Variety::WhiteMaster => "White Master",
            Variety::TripleA => "Triple A",
            Variety::Supemodel => "Supemodel",
            Variety::Tresor => "Tresor",
            Variety::StrongLove => "Strong Love",
            Variety::StrongGold => "Strong Gold",
            Variety::Respectable => "Respectable",
            Variety::Montezuma => "Montezuma",
            Variety::Columbus => "Columbus",
            Variety::Valdivia => "Valdivia",
        }
    }
}

impl Display for Variety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flower variety: {0}")]
pub struct UnknownVariety(pub String);

impl FromStr for Variety {
    type Err = UnknownVariety;

    /// Case-insensitive on the catalogue name, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variety::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariety(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalogue_names_loosely() {
        assert_eq!("First star".parse::<Variety>().unwrap(), Variety::FirstStar);
        assert_eq!("  white master ".parse::<Variety>().unwrap(), Variety::WhiteMaster);
        assert_eq!("CIRCUIT".parse::<Variety>().unwrap(), Variety::Circuit);
    }

    #[test]
    fn rejects_names_outside_the_catalogue() {
        assert_eq!(
            "Black Baccara".parse::<Variety>(),
            Err(UnknownVariety("Black Baccara".into()))
        );
        assert!("".parse::<Variety>().is_err());
    }

    #[test]
    fn every_variety_round_trips_through_its_name() {
        for variety in Variety::ALL {
            assert_eq!(variety.name().parse::<Variety>().unwrap(), variety);
            assert_eq!(variety.to_string(), variety.name());
        }
    }
}
