//! Input validation errors shared by every calculation entry point.

/// A caller-supplied value violates a physical invariant.
///
/// Calculations fail fast with this error instead of propagating NaN into
/// downstream visuals.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    #[error("{name} must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("eccentricity {0} does not describe a bound orbit (must be in [0, 1))")]
    UnboundOrbit(f64),

    #[error("{name} must be at least {min} (got {value})")]
    TooFewSamples {
        name: &'static str,
        value: usize,
        min: usize,
    },
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, InvalidParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidParameterError::NonFinite { name, value })
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, InvalidParameterError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidParameterError::NotPositive { name, value })
    }
}

pub(crate) fn require_non_negative(
    name: &'static str,
    value: f64,
) -> Result<f64, InvalidParameterError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidParameterError::Negative { name, value })
    }
}

/// Inclusive range check.
pub(crate) fn require_in_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, InvalidParameterError> {
    require_finite(name, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InvalidParameterError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
