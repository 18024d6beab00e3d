use serde::Serialize;

use crate::models::Tier;

pub const SILVER_MIN_SCORE: f64 = 25.0;
pub const GOLD_MIN_SCORE: f64 = 50.0;
pub const PLATINUM_MIN_SCORE: f64 = 75.0;

/// One row of the tier table. Boundaries are closed-open: `[min_score, max_score)`.
#[derive(Debug, Clone, Serialize)]
pub struct TierDefinition {
    pub tier: Tier,
    pub name: &'static str,
    pub rank: u8,
    pub min_score: f64,
    /// `None` for the top tier, which is open-ended.
    pub max_score: Option<f64>,
    pub multiplier: f64,
    pub benefits: &'static [&'static str],
}

impl TierDefinition {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min_score && self.max_score.map_or(true, |max| score < max)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierTable {
    tiers: [TierDefinition; 4],
}

pub static TIER_TABLE: TierTable = TierTable::standard();

impl TierTable {
    pub const fn standard() -> Self {
        Self {
            tiers: [
                TierDefinition {
                    tier: Tier::Bronze,
                    name: "Bronze",
                    rank: 0,
                    min_score: 0.0,
                    max_score: Some(SILVER_MIN_SCORE),
                    multiplier: 1.0,
                    benefits: &[
                        "Access to public launches",
                        "Basic reward eligibility",
                        "Community access",
                    ],
                },
                TierDefinition {
                    tier: Tier::Silver,
                    name: "Silver",
                    rank: 1,
                    min_score: SILVER_MIN_SCORE,
                    max_score: Some(GOLD_MIN_SCORE),
                    multiplier: 1.5,
                    benefits: &[
                        "Everything in Bronze",
                        "1.5x allocation multiplier",
                        "Early access to select launches",
                    ],
                },
                TierDefinition {
                    tier: Tier::Gold,
                    name: "Gold",
                    rank: 2,
                    min_score: GOLD_MIN_SCORE,
                    max_score: Some(PLATINUM_MIN_SCORE),
                    multiplier: 2.0,
                    benefits: &[
                        "Everything in Silver",
                        "2x allocation multiplier",
                        "Gold-gated launches",
                        "Priority reward claims",
                    ],
                },
                TierDefinition {
                    tier: Tier::Platinum,
                    name: "Platinum",
                    rank: 3,
                    min_score: PLATINUM_MIN_SCORE,
                    max_score: None,
                    multiplier: 2.5,
                    benefits: &[
                        "Everything in Gold",
                        "2.5x allocation multiplier",
                        "Exclusive platinum launches",
                        "Guaranteed allocations",
                    ],
                },
            ],
        }
    }

    pub fn get(&self, tier: Tier) -> &TierDefinition {
        // Rows are stored in rank order, matching the enum declaration order.
        &self.tiers[tier as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter()
    }

    /// Checks that the rows partition [0, inf) in rank order with rising multipliers.
    pub fn validate(&self) -> Result<(), String> {
        let first = &self.tiers[0];
        if first.min_score != 0.0 {
            return Err(format!("{} must start at 0, got {}", first.name, first.min_score));
        }

        for (idx, def) in self.tiers.iter().enumerate() {
            if def.rank as usize != idx || def.tier as usize != idx {
                return Err(format!("{} is out of rank order", def.name));
            }
            if def.multiplier < 1.0 {
                return Err(format!("{} multiplier must be >= 1.0", def.name));
            }

            match (def.max_score, self.tiers.get(idx + 1)) {
                (Some(max), Some(next)) => {
                    if max != next.min_score {
                        return Err(format!(
                            "Gap or overlap between {} ({}) and {} ({})",
                            def.name, max, next.name, next.min_score
                        ));
                    }
                    if next.multiplier <= def.multiplier {
                        return Err(format!(
                            "{} multiplier must exceed {}",
                            next.name, def.name
                        ));
                    }
                }
                (None, None) => {}
                (None, Some(_)) => {
                    return Err(format!("{} is unbounded but is not the top tier", def.name));
                }
                (Some(_), None) => {
                    return Err(format!("Top tier {} must be open-ended", def.name));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert!(TIER_TABLE.validate().is_ok());
    }

    #[test]
    fn test_lookup_by_tier() {
        assert_eq!(TIER_TABLE.get(Tier::Gold).name, "Gold");
        assert_eq!(TIER_TABLE.get(Tier::Platinum).max_score, None);
        assert_eq!(TIER_TABLE.get(Tier::Bronze).multiplier, 1.0);
    }

    #[test]
    fn test_each_score_in_exactly_one_row() {
        for score in [0.0, 10.0, 24.999, 25.0, 49.999, 50.0, 74.999, 75.0, 100.0, 250.0] {
            let hits = TIER_TABLE.iter().filter(|d| d.contains(score)).count();
            assert_eq!(hits, 1, "score {} matched {} rows", score, hits);
        }
    }

    #[test]
    fn test_gap_is_rejected() {
        let mut table = TierTable::standard();
        table.tiers[1].max_score = Some(45.0);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_flat_multiplier_is_rejected() {
        let mut table = TierTable::standard();
        table.tiers[2].multiplier = 1.5;
        assert!(table.validate().is_err());
    }
}
