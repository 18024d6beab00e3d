use std::fmt;
use std::str::FromStr;

use super::Catalog;
use crate::models::{FairGateError, LeaderboardEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    AllTime,
    Monthly,
    Weekly,
}

impl Timeframe {
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::AllTime => "All Time",
            Timeframe::Monthly => "This Month",
            Timeframe::Weekly => "This Week",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = FairGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "all-time" | "all_time" => Ok(Timeframe::AllTime),
            "monthly" | "month" => Ok(Timeframe::Monthly),
            "weekly" | "week" => Ok(Timeframe::Weekly),
            other => Err(FairGateError::Validation(format!("Unknown timeframe: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardStats<'a> {
    pub top_score: f64,
    pub most_improved: Option<&'a LeaderboardEntry>,
    pub active_wallets: usize,
}

impl Catalog {
    pub fn leaderboard(&self, timeframe: Timeframe) -> &[LeaderboardEntry] {
        match timeframe {
            Timeframe::AllTime => &self.leaderboard.all_time,
            Timeframe::Monthly => &self.leaderboard.monthly,
            Timeframe::Weekly => &self.leaderboard.weekly,
        }
    }

    /// Where a wallet with `score` would slot in: ahead of the first entry it
    /// meets or beats, otherwise just past the end.
    pub fn rank_for_score(&self, timeframe: Timeframe, score: f64) -> usize {
        let entries = self.leaderboard(timeframe);
        entries
            .iter()
            .position(|e| e.fairscore <= score)
            .map_or(entries.len() + 1, |idx| idx + 1)
    }

    pub fn leaderboard_stats(&self, timeframe: Timeframe) -> LeaderboardStats<'_> {
        let entries = self.leaderboard(timeframe);
        LeaderboardStats {
            top_score: entries.first().map_or(0.0, |e| e.fairscore),
            // First entry wins ties, as a stable sort would leave it.
            most_improved: entries.iter().fold(None, |best: Option<&LeaderboardEntry>, e| match best {
                Some(b) if b.change >= e.change => Some(b),
                _ => Some(e),
            }),
            active_wallets: entries.len(),
        }
    }
}
