use serde::Serialize;

use super::rules::{HOT_THRESHOLD, RISING_THRESHOLD, STABLE_THRESHOLD};

/// Validated market signals ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    pub rank_velocity: f64,
    pub price_momentum: f64,
    pub review_growth: f64,
}

impl ScoreInput {
    pub fn score(&self) -> ScoreResult {
        super::compute(self.rank_velocity, self.price_momentum, self.review_growth)
    }
}

/// Categorical bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendLabel {
    Hot,
    Rising,
    Stable,
    Declining,
}

impl TrendLabel {
    /// Thresholds are inclusive lower bounds checked from the top down.
    pub fn from_score(score: f64) -> Self {
        if score >= HOT_THRESHOLD {
            Self::Hot
        } else if score >= RISING_THRESHOLD {
            Self::Rising
        } else if score >= STABLE_THRESHOLD {
            Self::Stable
        } else {
            Self::Declining
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Rising => "Rising",
            Self::Stable => "Stable",
            Self::Declining => "Declining",
        }
    }
}

/// Rounded sub-scores keyed by the signal that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub rank_velocity: f64,
    pub price_momentum: f64,
    pub review_growth: f64,
}

/// Composite score returned to callers, serialized as the HTTP success body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub label: TrendLabel,
    pub breakdown: ScoreBreakdown,
}
