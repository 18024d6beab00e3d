use crate::models::Tier;

/// Weight of the continuous score bonus; a score of 100 adds 50%.
pub const SCORE_BONUS_WEIGHT: f64 = 0.5;

/// Scaled launch allocation: `floor(base * multiplier(tier) * (1 + score/100 * 0.5))`.
///
/// Neither `score` nor `base_allocation` is clamped; out-of-range input flows
/// straight through the formula.
pub fn allocation(score: f64, tier: Tier, base_allocation: f64) -> i64 {
    let score_multiplier = 1.0 + (score / 100.0) * SCORE_BONUS_WEIGHT;
    (base_allocation * tier.multiplier() * score_multiplier).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_bronze() {
        let expected = (1000.0 * Tier::Bronze.multiplier() * 1.0_f64).floor() as i64;
        assert_eq!(allocation(0.0, Tier::Bronze, 1000.0), expected);
        assert_eq!(allocation(0.0, Tier::Bronze, 1000.0), 1000);
    }

    #[test]
    fn test_max_score_platinum() {
        let expected = (1000.0 * Tier::Platinum.multiplier() * 1.5_f64).floor() as i64;
        assert_eq!(allocation(100.0, Tier::Platinum, 1000.0), expected);
        assert_eq!(allocation(100.0, Tier::Platinum, 1000.0), 3750);
    }

    #[test]
    fn test_same_tier_different_scores() {
        let low = allocation(51.0, Tier::Gold, 1000.0);
        let high = allocation(74.0, Tier::Gold, 1000.0);
        assert!(high > low);
    }

    #[test]
    fn test_result_is_floored() {
        // 333 * 1.5 * 1.05 = 524.475
        assert_eq!(allocation(10.0, Tier::Silver, 333.0), 524);
    }

    #[test]
    fn test_negative_base_propagates() {
        assert!(allocation(50.0, Tier::Gold, -100.0) < 0);
    }
}
