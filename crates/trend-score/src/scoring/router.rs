use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use super::validation::parse_score_input;

/// Router exposing the trend scoring endpoint.
pub fn trend_router() -> Router {
    Router::new().route("/trend-score", post(trend_score_handler))
}

/// Reads the raw body so JSON parse failures stay inside our validation flow
/// rather than surfacing as extractor rejections.
pub(crate) async fn trend_score_handler(body: Bytes) -> Response {
    match parse_score_input(&body) {
        Ok(input) => {
            let result = input.score();
            debug!(
                score = result.score,
                label = result.label.label(),
                "computed trend score"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(errors) => {
            debug!(errors = ?errors.messages(), "rejected trend score payload");
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
    }
}
