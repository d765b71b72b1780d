pub const RANK_SCORE_CAP: f64 = 40.0;
pub const PRICE_SCORE_CAP: f64 = 30.0;
pub const REVIEW_SCORE_CAP: f64 = 30.0;

pub(crate) const HOT_THRESHOLD: f64 = 80.0;
pub(crate) const RISING_THRESHOLD: f64 = 60.0;
pub(crate) const STABLE_THRESHOLD: f64 = 40.0;

/// A velocity of +100 leaves roughly 9.5 of the 40 rank points.
const RANK_VELOCITY_SCALE: f64 = 100.0;

/// Negative velocity means the sales rank is improving, so it scores higher.
pub(crate) fn rank_score(rank_velocity: f64) -> f64 {
    let damped = (rank_velocity / RANK_VELOCITY_SCALE).tanh();
    ((1.0 - damped) * RANK_SCORE_CAP).clamp(0.0, RANK_SCORE_CAP)
}

pub(crate) fn price_score(price_momentum: f64) -> f64 {
    price_momentum.clamp(0.0, PRICE_SCORE_CAP)
}

pub(crate) fn review_score(review_growth: f64) -> f64 {
    review_growth.clamp(0.0, REVIEW_SCORE_CAP)
}

/// Rounds the exact binary value to one decimal, ties to even, so
/// 59.949999... stays 59.9 and 40.25 becomes 40.2.
pub(crate) fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_score_saturates_for_improving_rank() {
        assert_eq!(rank_score(-1000.0), RANK_SCORE_CAP);
        assert_eq!(rank_score(0.0), RANK_SCORE_CAP);
        assert_eq!(rank_score(f64::MIN), RANK_SCORE_CAP);
    }

    #[test]
    fn rank_score_approaches_zero_for_falling_rank() {
        let score = rank_score(1000.0);
        assert!(score >= 0.0);
        assert!(score < 0.001, "expected near zero, got {score}");
        assert_eq!(rank_score(f64::MAX), 0.0);
    }

    #[test]
    fn rank_score_is_non_increasing_in_velocity() {
        let mut previous = rank_score(-500.0);
        let mut velocity = -500.0;
        while velocity <= 500.0 {
            let current = rank_score(velocity);
            assert!(
                current <= previous,
                "rank score rose from {previous} to {current} at velocity {velocity}"
            );
            previous = current;
            velocity += 2.5;
        }
    }

    #[test]
    fn price_and_review_floor_and_cap() {
        assert_eq!(price_score(-10.0), 0.0);
        assert_eq!(price_score(1e12), PRICE_SCORE_CAP);
        assert_eq!(price_score(12.5), 12.5);
        assert_eq!(review_score(-5.0), 0.0);
        assert_eq!(review_score(250.0), REVIEW_SCORE_CAP);
    }

    #[test]
    fn reclamping_in_range_values_is_a_no_op() {
        for value in [0.0, 7.25, 29.9, PRICE_SCORE_CAP] {
            assert_eq!(price_score(price_score(value)), price_score(value));
            assert_eq!(review_score(review_score(value)), review_score(value));
        }
        let rank = rank_score(35.0);
        assert_eq!(rank.clamp(0.0, RANK_SCORE_CAP), rank);
    }

    #[test]
    fn round_tenth_keeps_one_decimal() {
        assert_eq!(round_tenth(21.517), 21.5);
        assert_eq!(round_tenth(32.1033), 32.1);
        assert_eq!(round_tenth(100.0), 100.0);
        assert_eq!(round_tenth(0.0000001), 0.0);
    }

    #[test]
    fn round_tenth_rounds_the_stored_value_not_a_scaled_copy() {
        assert_eq!(round_tenth(59.949999999999996), 59.9);
        assert_eq!(round_tenth(40.0 + 0.05 + 19.9), 59.9);
        // 1.15 and 41.15 are stored just below the midpoint.
        assert_eq!(round_tenth(1.15), 1.1);
        assert_eq!(round_tenth(41.15), 41.1);
        // 0.05 is stored just above it.
        assert_eq!(round_tenth(0.05), 0.1);
    }

    #[test]
    fn round_tenth_sends_exact_ties_to_even() {
        assert_eq!(round_tenth(0.25), 0.2);
        assert_eq!(round_tenth(2.25), 2.2);
        assert_eq!(round_tenth(40.25), 40.2);
        assert_eq!(round_tenth(0.75), 0.8);
        assert_eq!(round_tenth(42.75), 42.8);
    }
}
