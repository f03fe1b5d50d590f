// ---------------------------------------------------------------------------
// WorksheetError: validation failures surfaced to the analyst
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised while entering inputs or generating the summary.
///
/// Every variant is user-correctable: the message is shown next to the
/// offending control (or in the results window) and the analyst re-enters
/// values. Nothing here aborts the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorksheetError {
    /// A numeric input was negative, NaN or infinite, or otherwise outside
    /// the range the calculation accepts.
    InvalidInput { field: String, reason: String },
    /// Summary generation needed a value that has not been computed yet.
    MissingState(String),
}

impl WorksheetError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        WorksheetError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn missing(what: impl Into<String>) -> Self {
        WorksheetError::MissingState(what.into())
    }
}

impl fmt::Display for WorksheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorksheetError::InvalidInput { field, reason } => {
                write!(f, "Invalid input for {field}: {reason}")
            }
            WorksheetError::MissingState(what) => write!(f, "Missing state: {what}"),
        }
    }
}

impl std::error::Error for WorksheetError {}

/// Checks a numeric input the way the input widgets constrain it: finite and
/// not below zero. Returns the value unchanged on success.
pub fn validate_non_negative(field: &str, value: f64) -> Result<f64, WorksheetError> {
    if !value.is_finite() {
        return Err(WorksheetError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(WorksheetError::invalid(
            field,
            format!("must be at least 0, got {value}"),
        ));
    }
    Ok(value)
}

/// Like [`validate_non_negative`] but also rejects zero, for divisors.
pub fn validate_positive(field: &str, value: f64) -> Result<f64, WorksheetError> {
    let value = validate_non_negative(field, value)?;
    if value == 0.0 {
        return Err(WorksheetError::invalid(field, "must be greater than 0"));
    }
    Ok(value)
}

/// Modal-split ratios are fractions of the workforce.
pub fn validate_ratio(field: &str, value: f64) -> Result<f64, WorksheetError> {
    let value = validate_non_negative(field, value)?;
    if value > 1.0 {
        return Err(WorksheetError::invalid(
            field,
            format!("must be between 0 and 1, got {value}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = WorksheetError::invalid("power_kw", "must be at least 0, got -1");
        let msg = format!("{err}");
        assert!(msg.contains("Invalid input"), "got: {msg}");
        assert!(msg.contains("power_kw"), "got: {msg}");
        assert!(msg.contains("-1"), "got: {msg}");
    }

    #[test]
    fn test_display_missing_state() {
        let err = WorksheetError::missing("no equipment added");
        let msg = format!("{err}");
        assert!(msg.contains("Missing state"), "got: {msg}");
        assert!(msg.contains("no equipment added"), "got: {msg}");
    }

    #[test]
    fn test_is_error_trait() {
        let err = WorksheetError::missing("x");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(validate_non_negative("x", 0.0), Ok(0.0));
        assert_eq!(validate_non_negative("x", 2.5), Ok(2.5));
    }

    #[test]
    fn test_non_negative_rejects_negative_and_nan() {
        assert!(validate_non_negative("x", -0.1).is_err());
        assert!(validate_non_negative("x", f64::NAN).is_err());
        assert!(validate_non_negative("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        let err = validate_positive("annual_production_m2", 0.0).unwrap_err();
        assert!(matches!(err, WorksheetError::InvalidInput { .. }));
        assert_eq!(validate_positive("annual_production_m2", 1.0), Ok(1.0));
    }

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(validate_ratio("car_ratio", 0.0), Ok(0.0));
        assert_eq!(validate_ratio("car_ratio", 1.0), Ok(1.0));
        assert!(validate_ratio("car_ratio", 1.01).is_err());
    }

    #[test]
    fn test_serde_roundtrip_preserves_variant() {
        let err = WorksheetError::invalid("distance_m", "must be a finite number");
        let json = serde_json::to_string(&err).unwrap();
        let decoded: WorksheetError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, decoded);
    }
}
