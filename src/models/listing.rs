use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

use super::Tier;

/// Anything that sits behind a minimum tier.
pub trait GatedResource {
    fn min_tier(&self) -> Tier;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchProject {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub twitter: String,
    pub min_tier: Tier,
    pub total_raise: f64,
    pub token_price: f64,
    pub total_tokens: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: LaunchStatus,
    #[serde(default)]
    pub participants: u32,
    #[serde(default)]
    pub raised: f64,
    pub chain: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

impl LaunchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchStatus::Upcoming => "upcoming",
            LaunchStatus::Active => "active",
            LaunchStatus::Completed => "completed",
            LaunchStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upcoming" => Some(LaunchStatus::Upcoming),
            "active" => Some(LaunchStatus::Active),
            "completed" => Some(LaunchStatus::Completed),
            "cancelled" => Some(LaunchStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GatedResource for LaunchProject {
    fn min_tier(&self) -> Tier {
        self.min_tier
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub min_tier: Tier,
    #[serde(default)]
    pub min_score: f64,
    pub value: String,
    #[serde(default)]
    pub claimed: bool,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Airdrop,
    Multiplier,
    Access,
    Nft,
}

impl RewardKind {
    pub fn label(&self) -> &'static str {
        match self {
            RewardKind::Airdrop => "Airdrop",
            RewardKind::Multiplier => "Multiplier",
            RewardKind::Access => "Access",
            RewardKind::Nft => "NFT",
        }
    }
}

impl GatedResource for Reward {
    fn min_tier(&self) -> Tier {
        self.min_tier
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub wallet: String,
    pub fairscore: f64,
    pub tier: Tier,
    pub badges: u32,
    /// Rank movement since the previous period.
    pub change: i32,
    #[serde(default)]
    pub streak: Option<u32>,
}
