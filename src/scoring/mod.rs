pub mod tiers;
pub mod classifier;
pub mod gate;
pub mod allocation;

pub use tiers::{TierDefinition, TierTable, TIER_TABLE};
pub use classifier::classify;
pub use gate::{can_access, evaluate_gate, evaluate_resource, reward_eligibility, GateDecision, RewardEligibility};
pub use allocation::{allocation, SCORE_BONUS_WEIGHT};
