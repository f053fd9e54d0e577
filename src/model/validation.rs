use thiserror::Error;

use super::field::Field;

/// Highest moisture reading accepted; larger inputs are clamped.
pub const MOISTURE_MAX: f64 = 100.0;

/// Highest final score accepted.
pub const SCORE_MAX: u8 = 100;

/// Validation errors for form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{field} must be a number: {input}")]
    InvalidNumber { field: Field, input: String },
    #[error("score must be a whole number from 0 to 100: {0}")]
    InvalidScore(String),
}

/// Checks that a required field is non-empty after trimming.
pub fn validate_required(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Parses a measurement. Empty input is `0.0`; `,` is accepted as decimal separator.
///
/// Moisture is clamped to `[0, 100]`. Other measurements are taken as typed,
/// negatives included.
pub fn parse_decimal(field: Field, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            input: trimmed.to_string(),
        })?;
    Ok(if field == Field::MoisturePercent {
        value.clamp(0.0, MOISTURE_MAX)
    } else {
        value
    })
}

/// Parses the final score. Empty input is `0`.
pub fn parse_score(input: &str) -> Result<u8, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u8>()
        .ok()
        .filter(|s| *s <= SCORE_MAX)
        .ok_or_else(|| ValidationError::InvalidScore(trimmed.to_string()))
}
