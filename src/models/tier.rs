use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FairGateError;
use crate::scoring::tiers::{TierDefinition, TIER_TABLE};

/// Reputation tier, ordered bronze < silver < gold < platinum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
        }
    }

    pub fn definition(&self) -> &'static TierDefinition {
        TIER_TABLE.get(*self)
    }

    /// Ordinal rank from the tier table (bronze = 0).
    pub fn rank(&self) -> u8 {
        self.definition().rank
    }

    pub fn display_name(&self) -> &'static str {
        self.definition().name
    }

    pub fn multiplier(&self) -> f64 {
        self.definition().multiplier
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = FairGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bronze" => Ok(Tier::Bronze),
            "silver" => Ok(Tier::Silver),
            "gold" => Ok(Tier::Gold),
            "platinum" => Ok(Tier::Platinum),
            _ => Err(FairGateError::UnknownTier(s.to_string())),
        }
    }
}
