//! Trend scoring: a pure transform from three market signals to a bounded score.
//!
//! The HTTP boundary lives in [`router`], which hands untyped request bodies to
//! [`validation`] and only ever calls [`compute`] with a fully validated
//! [`ScoreInput`].

pub mod domain;
mod rules;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{ScoreBreakdown, ScoreInput, ScoreResult, TrendLabel};
pub use router::trend_router;
pub use rules::{PRICE_SCORE_CAP, RANK_SCORE_CAP, REVIEW_SCORE_CAP};
pub use validation::{parse_score_input, PayloadError, ValidationErrors};

/// Scores a product from its rank velocity, price momentum and review growth.
///
/// Each signal maps to an independently capped sub-score (40 / 30 / 30), so the
/// rounded total always lands in `0.0..=100.0`. Never fails for finite inputs.
pub fn compute(rank_velocity: f64, price_momentum: f64, review_growth: f64) -> ScoreResult {
    let rank_score = rules::rank_score(rank_velocity);
    let price_score = rules::price_score(price_momentum);
    let review_score = rules::review_score(review_growth);

    let score = rules::round_tenth(rank_score + price_score + review_score);

    ScoreResult {
        score,
        label: TrendLabel::from_score(score),
        breakdown: ScoreBreakdown {
            rank_velocity: rules::round_tenth(rank_score),
            price_momentum: rules::round_tenth(price_score),
            review_growth: rules::round_tenth(review_score),
        },
    }
}
