use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::Tier;
use crate::scoring::classify;

/// One wallet's scoring snapshot as returned by FairScale.
///
/// Records are replaced wholesale on every fetch; nothing mutates one after
/// it has been decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReputationRecord {
    pub wallet: String,

    /// On-chain activity sub-score (0-100).
    #[serde(rename = "fairscore_base", default)]
    pub wallet_score: f64,

    /// Social signal sub-score (0-100).
    #[serde(default)]
    pub social_score: f64,

    /// Authoritative score used for tiering.
    #[serde(rename = "fairscore")]
    pub combined_score: f64,

    pub tier: Tier,

    #[serde(default)]
    pub badges: Vec<Badge>,

    #[serde(default)]
    pub actions: Vec<serde_json::Value>,

    /// Upstream's own timestamp, kept as the raw string.
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub features: Features,

    #[serde(default = "Utc::now", skip_serializing)]
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Badge {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub tier: Tier,
}

/// Named numeric metrics, display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Features(BTreeMap<String, f64>);

impl Features {
    pub const LST_PERCENTILE: &'static str = "lst_percentile_score";
    pub const MAJOR_PERCENTILE: &'static str = "major_percentile_score";
    pub const NATIVE_SOL_PERCENTILE: &'static str = "native_sol_percentile";
    pub const STABLE_PERCENTILE: &'static str = "stable_percentile_score";
    pub const TX_COUNT: &'static str = "tx_count";
    pub const ACTIVE_DAYS: &'static str = "active_days";
    pub const MEDIAN_GAP_HOURS: &'static str = "median_gap_hours";
    pub const WALLET_AGE_DAYS: &'static str = "wallet_age_days";

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tx_count(&self) -> Option<f64> {
        self.get(Self::TX_COUNT)
    }

    pub fn active_days(&self) -> Option<f64> {
        self.get(Self::ACTIVE_DAYS)
    }

    pub fn wallet_age_days(&self) -> Option<f64> {
        self.get(Self::WALLET_AGE_DAYS)
    }
}

impl FromIterator<(String, f64)> for Features {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Features(iter.into_iter().collect())
    }
}

impl ReputationRecord {
    /// Tier recomputed locally from `combined_score`.
    pub fn derived_tier(&self) -> Tier {
        classify(self.combined_score)
    }

    /// Whether the upstream tier agrees with the local classification.
    pub fn tier_is_consistent(&self) -> bool {
        self.derived_tier() == self.tier
    }

    pub fn badges_for_tier(&self, tier: Tier) -> Vec<&Badge> {
        self.badges.iter().filter(|b| b.tier == tier).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "wallet": "ABC123",
        "fairscore_base": 71.5,
        "social_score": 40.0,
        "fairscore": 82.0,
        "tier": "platinum",
        "badges": [
            {"id": "early", "label": "Early Adopter", "description": "Active since genesis", "tier": "gold"},
            {"id": "lst", "label": "LST Whale", "description": "Top LST holder", "tier": "platinum"}
        ],
        "actions": [],
        "timestamp": "2025-01-12T10:00:00Z",
        "features": {"tx_count": 1520, "active_days": 210, "wallet_age_days": 640.5}
    }"#;

    #[test]
    fn test_decode_full_record() {
        let record: ReputationRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(record.wallet, "ABC123");
        assert_eq!(record.wallet_score, 71.5);
        assert_eq!(record.combined_score, 82.0);
        assert_eq!(record.tier, Tier::Platinum);
        assert_eq!(record.badges.len(), 2);
        assert_eq!(record.features.tx_count(), Some(1520.0));
        assert_eq!(record.features.wallet_age_days(), Some(640.5));
        assert!(record.tier_is_consistent());
    }

    #[test]
    fn test_decode_minimal_record() {
        let record: ReputationRecord =
            serde_json::from_str(r#"{"wallet":"W","fairscore":12.0,"tier":"bronze"}"#).unwrap();
        assert_eq!(record.social_score, 0.0);
        assert!(record.badges.is_empty());
        assert!(record.features.is_empty());
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_inconsistent_tier_detected() {
        let record: ReputationRecord =
            serde_json::from_str(r#"{"wallet":"W","fairscore":30.0,"tier":"gold"}"#).unwrap();
        assert_eq!(record.derived_tier(), Tier::Silver);
        assert!(!record.tier_is_consistent());
    }

    #[test]
    fn test_badges_for_tier() {
        let record: ReputationRecord = serde_json::from_str(SAMPLE).unwrap();
        let gold = record.badges_for_tier(Tier::Gold);
        assert_eq!(gold.len(), 1);
        assert_eq!(gold[0].id, "early");
    }
}
