//! Launch, reward and leaderboard listings.
//!
//! The listings ship embedded in the binary and can be replaced with a JSON
//! file of the same shape via `launchpad.catalog_path`.

pub mod launchpad;
pub mod leaderboard;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::models::{FairGateError, LaunchProject, LeaderboardEntry, Result, Reward};

pub use launchpad::{LaunchFilter, LaunchView, RewardView};
pub use leaderboard::{LeaderboardStats, Timeframe};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub launches: Vec<LaunchProject>,
    pub rewards: Vec<Reward>,
    pub leaderboard: LeaderboardData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardData {
    #[serde(default)]
    pub all_time: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub monthly: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub weekly: Vec<LeaderboardEntry>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FairGateError::Catalog(format!("Invalid catalog document: {}", e)))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded catalog from {} ({} launches, {} rewards)",
            path.as_ref().display(),
            catalog.launches.len(),
            catalog.rewards.len()
        );
        Ok(catalog)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }

    pub fn launch(&self, id: &str) -> Option<&LaunchProject> {
        self.launches.iter().find(|l| l.id == id)
    }

    pub fn reward(&self, id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.launches.is_empty());
        assert!(!catalog.rewards.is_empty());
        assert_eq!(catalog.leaderboard.all_time.len(), 15);
        assert!(catalog.launch("sol-forge").is_some());
        assert!(catalog.reward("nope").is_none());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(Catalog::from_json("{\"launches\": 3}"), Err(FairGateError::Catalog(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Catalog::load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(FairGateError::Io(_))));
    }

    #[test]
    fn test_builtin_leaderboard_tiers_match_scores() {
        let catalog = Catalog::builtin().unwrap();
        for entry in &catalog.leaderboard.all_time {
            assert_eq!(crate::scoring::classify(entry.fairscore), entry.tier, "{}", entry.wallet);
        }
    }
}
