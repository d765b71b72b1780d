use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::scoring::ScoreResult;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn assert_bounded(result: &ScoreResult) {
    assert!(
        (0.0..=100.0).contains(&result.score),
        "score {} out of bounds",
        result.score
    );
    assert!((0.0..=40.0).contains(&result.breakdown.rank_velocity));
    assert!((0.0..=30.0).contains(&result.breakdown.price_momentum));
    assert!((0.0..=30.0).contains(&result.breakdown.review_growth));
}

pub(super) fn json_post(body: impl Into<Body>) -> Request<Body> {
    Request::post("/trend-score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
