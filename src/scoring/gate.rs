use serde::Serialize;

use crate::models::{GatedResource, Reward, Tier};

/// Whether `user_tier` meets the `required_tier` floor.
pub fn can_access(user_tier: Tier, required_tier: Tier) -> bool {
    user_tier.rank() >= required_tier.rank()
}

/// Outcome of gating a resource for a user who may not have a tier yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateDecision {
    pub has_access: bool,
    /// `None` when no wallet is connected or no score has been fetched.
    pub user_level: Option<u8>,
    pub required_level: u8,
    pub required_tier: Tier,
    pub message: String,
}

pub fn evaluate_gate(user_tier: Option<Tier>, required_tier: Tier) -> GateDecision {
    let Some(user_tier) = user_tier else {
        return GateDecision {
            has_access: false,
            user_level: None,
            required_level: required_tier.rank(),
            required_tier,
            message: "Connect your wallet to check access".to_string(),
        };
    };

    let has_access = can_access(user_tier, required_tier);
    let message = if has_access {
        format!("You have {} tier access", user_tier.display_name())
    } else {
        format!(
            "Requires {} tier or above. You are currently {}.",
            required_tier.display_name(),
            user_tier.display_name()
        )
    };

    GateDecision {
        has_access,
        user_level: Some(user_tier.rank()),
        required_level: required_tier.rank(),
        required_tier,
        message,
    }
}

pub fn evaluate_resource<R: GatedResource>(user_tier: Option<Tier>, resource: &R) -> GateDecision {
    evaluate_gate(user_tier, resource.min_tier())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardEligibility {
    pub tier_ok: bool,
    pub score_ok: bool,
    pub claimed: bool,
}

impl RewardEligibility {
    pub fn can_claim(&self) -> bool {
        self.tier_ok && self.score_ok && !self.claimed
    }
}

/// A reward needs the tier floor, the score floor, and must not be claimed yet.
pub fn reward_eligibility(user_tier: Option<Tier>, user_score: f64, reward: &Reward) -> RewardEligibility {
    RewardEligibility {
        tier_ok: user_tier.map_or(false, |tier| can_access(tier, reward.min_tier)),
        score_ok: user_score >= reward.min_score,
        claimed: reward.claimed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RewardKind;
    use chrono::Utc;

    fn reward(min_tier: Tier, min_score: f64, claimed: bool) -> Reward {
        Reward {
            id: "r1".to_string(),
            title: "Test drop".to_string(),
            description: String::new(),
            kind: RewardKind::Airdrop,
            min_tier,
            min_score,
            value: "500 FAIR".to_string(),
            claimed,
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn test_reflexive() {
        for tier in Tier::ALL {
            assert!(can_access(tier, tier));
        }
    }

    #[test]
    fn test_monotonic() {
        for low in Tier::ALL {
            for high in Tier::ALL.iter().copied().filter(|t| t.rank() > low.rank()) {
                assert!(can_access(high, low), "{} should reach {}", high, low);
                assert!(!can_access(low, high), "{} should not reach {}", low, high);
            }
        }
    }

    #[test]
    fn test_no_tier_is_denied() {
        let decision = evaluate_gate(None, Tier::Bronze);
        assert!(!decision.has_access);
        assert_eq!(decision.user_level, None);
        assert_eq!(decision.message, "Connect your wallet to check access");
    }

    #[test]
    fn test_messages() {
        let granted = evaluate_gate(Some(Tier::Platinum), Tier::Gold);
        assert!(granted.has_access);
        assert_eq!(granted.message, "You have Platinum tier access");

        let denied = evaluate_gate(Some(Tier::Silver), Tier::Gold);
        assert!(!denied.has_access);
        assert_eq!(denied.user_level, Some(1));
        assert_eq!(denied.required_level, 2);
        assert_eq!(
            denied.message,
            "Requires Gold tier or above. You are currently Silver."
        );
    }

    #[test]
    fn test_reward_needs_tier_and_score() {
        let r = reward(Tier::Silver, 40.0, false);
        assert!(reward_eligibility(Some(Tier::Gold), 55.0, &r).can_claim());

        let low_score = reward_eligibility(Some(Tier::Gold), 30.0, &r);
        assert!(low_score.tier_ok);
        assert!(!low_score.score_ok);
        assert!(!low_score.can_claim());

        assert!(!reward_eligibility(Some(Tier::Bronze), 90.0, &r).can_claim());
        assert!(!reward_eligibility(None, 90.0, &r).can_claim());
    }

    #[test]
    fn test_claimed_reward_is_locked() {
        let r = reward(Tier::Bronze, 0.0, true);
        let eligibility = reward_eligibility(Some(Tier::Platinum), 99.0, &r);
        assert!(eligibility.tier_ok && eligibility.score_ok);
        assert!(!eligibility.can_claim());
    }
}
