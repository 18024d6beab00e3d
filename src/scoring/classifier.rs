use crate::models::Tier;
use super::tiers::{GOLD_MIN_SCORE, PLATINUM_MIN_SCORE, SILVER_MIN_SCORE};

/// Map a score to its tier. Never fails: anything below silver, including
/// negative or NaN input, is bronze, and anything from 75 up is platinum.
pub fn classify(score: f64) -> Tier {
    match score {
        s if s >= PLATINUM_MIN_SCORE => Tier::Platinum,
        s if s >= GOLD_MIN_SCORE => Tier::Gold,
        s if s >= SILVER_MIN_SCORE => Tier::Silver,
        _ => Tier::Bronze,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(24.999), Tier::Bronze);
        assert_eq!(classify(25.0), Tier::Silver);
        assert_eq!(classify(49.999), Tier::Silver);
        assert_eq!(classify(50.0), Tier::Gold);
        assert_eq!(classify(74.999), Tier::Gold);
        assert_eq!(classify(75.0), Tier::Platinum);
    }

    #[test]
    fn test_out_of_range_input() {
        assert_eq!(classify(-10.0), Tier::Bronze);
        assert_eq!(classify(f64::NAN), Tier::Bronze);
        assert_eq!(classify(140.0), Tier::Platinum);
        assert_eq!(classify(f64::INFINITY), Tier::Platinum);
    }

    #[test]
    fn test_platinum_only_from_75() {
        let mut s = 0.0;
        while s < 75.0 {
            assert_ne!(classify(s), Tier::Platinum, "score {}", s);
            s += 0.25;
        }
        let mut s = 75.0;
        while s <= 120.0 {
            assert_eq!(classify(s), Tier::Platinum, "score {}", s);
            s += 0.25;
        }
    }

    #[test]
    fn test_agrees_with_table_rows() {
        for score in [0.0, 12.5, 25.0, 37.0, 50.0, 61.0, 75.0, 99.0] {
            let tier = classify(score);
            assert!(tier.definition().contains(score));
        }
    }
}
