use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;

/// Dashboard section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Picks,
    Combinadas,
    Historial,
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "picks" | "predicciones" => Ok(Tab::Picks),
            "combinadas" => Ok(Tab::Combinadas),
            "historial" | "history" => Ok(Tab::Historial),
            other => bail!("unknown tab '{}' (expected picks, combinadas or historial)", other),
        }
    }
}

/// Competition whose matches are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Competition {
    #[default]
    Primera,
    Segunda,
    Copa,
    Champions,
}

impl Competition {
    pub fn display_name(&self) -> &'static str {
        match self {
            Competition::Primera => "LaLiga EA Sports",
            Competition::Segunda => "LaLiga Hypermotion",
            Competition::Copa => "Copa del Rey",
            Competition::Champions => "Champions League",
        }
    }
}

impl FromStr for Competition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primera" => Ok(Competition::Primera),
            "segunda" => Ok(Competition::Segunda),
            "copa" => Ok(Competition::Copa),
            "champions" => Ok(Competition::Champions),
            other => bail!(
                "unknown competition '{}' (expected primera, segunda, copa or champions)",
                other
            ),
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// UI selection passed explicitly into the composer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub tab: Tab,
    pub competition: Competition,
    /// Only show matches with at least one recommended pick
    pub edge_only: bool,
}
