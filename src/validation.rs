//! Range filter validation.
//!
//! The filter form submits two free-text fields. Both must coerce to integers
//! and `min` must be strictly below `max`; otherwise each offending field gets
//! its own inline message and nothing is submitted.

use thiserror::Error;

pub const EXPECTED_NUMBER: &str = "Expected a number.";
pub const MUST_BE_INTEGER: &str = "Must be an integer.";
pub const MAX_NOT_GREATER: &str = "The maximum value must be greater than the minimum value.";

/// A validated inclusive range. Construction enforces `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    min: i64,
    max: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", MAX_NOT_GREATER)]
pub struct InvalidRange {
    pub min: i64,
    pub max: i64,
}

impl RangeFilter {
    pub fn new(min: i64, max: i64) -> Result<Self, InvalidRange> {
        if min < max {
            Ok(Self { min, max })
        } else {
            Err(InvalidRange { min, max })
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Per-field validation messages for the range form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("invalid range (min: {min:?}, max: {max:?})")]
pub struct RangeErrors {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeErrors {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Validate raw form input into a [`RangeFilter`].
pub fn validate_range(min: &str, max: &str) -> Result<RangeFilter, RangeErrors> {
    let parsed_min = coerce_integer(min);
    let parsed_max = coerce_integer(max);

    match (parsed_min, parsed_max) {
        (Ok(min), Ok(max)) => RangeFilter::new(min, max).map_err(|err| RangeErrors {
            min: None,
            max: Some(err.to_string()),
        }),
        (min, max) => Err(RangeErrors {
            min: min.err().map(str::to_string),
            max: max.err().map(str::to_string),
        }),
    }
}

/// Coerce text to an integer the way a numeric form field would: surrounding
/// whitespace is ignored, `12`, `12.0` and `1e3` are integers, `12.5` is not.
fn coerce_integer(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EXPECTED_NUMBER);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    let value: f64 = trimmed.parse().map_err(|_| EXPECTED_NUMBER)?;
    if !value.is_finite() {
        return Err(EXPECTED_NUMBER);
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(MUST_BE_INTEGER);
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordered_integers() {
        let range = validate_range("2019", "2023").unwrap();
        assert_eq!(range.min(), 2019);
        assert_eq!(range.max(), 2023);
    }

    #[test]
    fn trims_and_coerces_integral_floats() {
        let range = validate_range("  -5 ", "1e3").unwrap();
        assert_eq!(range.min(), -5);
        assert_eq!(range.max(), 1000);
        assert_eq!(validate_range("1.0", "2").unwrap().min(), 1);
    }

    #[test]
    fn rejects_inverted_range_on_max_field() {
        let errors = validate_range("10", "5").unwrap_err();
        assert_eq!(errors.min, None);
        assert_eq!(errors.max.as_deref(), Some(MAX_NOT_GREATER));
    }

    #[test]
    fn rejects_equal_bounds() {
        let errors = validate_range("7", "7").unwrap_err();
        assert_eq!(errors.max.as_deref(), Some(MAX_NOT_GREATER));
    }

    #[test]
    fn reports_each_field_independently() {
        let errors = validate_range("abc", "1.5").unwrap_err();
        assert_eq!(errors.min.as_deref(), Some(EXPECTED_NUMBER));
        assert_eq!(errors.max.as_deref(), Some(MUST_BE_INTEGER));

        let errors = validate_range("", "3").unwrap_err();
        assert_eq!(errors.min.as_deref(), Some(EXPECTED_NUMBER));
        assert_eq!(errors.max, None);
    }

    #[test]
    fn rejects_non_finite_and_out_of_range() {
        assert_eq!(
            validate_range("NaN", "1").unwrap_err().min.as_deref(),
            Some(EXPECTED_NUMBER)
        );
        assert_eq!(
            validate_range("1", "1e30").unwrap_err().max.as_deref(),
            Some(MUST_BE_INTEGER)
        );
    }

    #[test]
    fn range_filter_constructor_enforces_order() {
        assert!(RangeFilter::new(1, 2).is_ok());
        assert_eq!(RangeFilter::new(3, 1), Err(InvalidRange { min: 3, max: 1 }));
    }
}
