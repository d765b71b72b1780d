//! Boundary between untyped request bodies and the typed scoring core.
//!
//! Parsing happens in two explicit steps: [`parse_payload`] turns raw bytes into a
//! JSON object (or a [`PayloadError`]), then [`validate_fields`] converts the three
//! required signals, collecting every field problem instead of stopping at the
//! first one.

use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::ScoreInput;

pub const RANK_VELOCITY: &str = "rank_velocity";
pub const PRICE_MOMENTUM: &str = "price_momentum";
pub const REVIEW_GROWTH: &str = "review_growth";

/// Required fields in the order their errors are reported.
pub const REQUIRED_FIELDS: [&str; 3] = [RANK_VELOCITY, PRICE_MOMENTUM, REVIEW_GROWTH];

/// Body-level failures; either one short-circuits field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("Invalid JSON payload")]
    InvalidJson,
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

/// Problem with a single required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Missing required field '{0}'")]
    Missing(&'static str),
    #[error("Field '{0}' must be numeric")]
    NotNumeric(&'static str),
}

/// Ordered list of messages returned as the `errors` array of a 400 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: impl ToString) {
        self.errors.push(error.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.errors
    }
}

impl From<PayloadError> for ValidationErrors {
    fn from(value: PayloadError) -> Self {
        let mut errors = Self::default();
        errors.push(value);
        errors
    }
}

pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, PayloadError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| PayloadError::InvalidJson)?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(PayloadError::NotAnObject),
    }
}

pub fn validate_fields(object: &Map<String, Value>) -> Result<ScoreInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut values = [0.0_f64; REQUIRED_FIELDS.len()];

    for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        match read_signal(object, field) {
            Ok(value) => *slot = value,
            Err(error) => errors.push(error),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let [rank_velocity, price_momentum, review_growth] = values;
    Ok(ScoreInput {
        rank_velocity,
        price_momentum,
        review_growth,
    })
}

/// Full boundary check used by the HTTP handler.
pub fn parse_score_input(body: &[u8]) -> Result<ScoreInput, ValidationErrors> {
    let object = parse_payload(body)?;
    validate_fields(&object)
}

fn read_signal(object: &Map<String, Value>, field: &'static str) -> Result<f64, FieldError> {
    let value = object.get(field).ok_or(FieldError::Missing(field))?;
    to_number(value).ok_or(FieldError::NotNumeric(field))
}

fn to_number(value: &Value) -> Option<f64> {
    match value {
        // Booleans are never treated as 0/1.
        Value::Bool(_) => None,
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
