//! Error types for the simulation.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can abort a run.
#[derive(Debug, Error)]
pub enum SimError {
    /// A belief, plasticity or stimulus value outside [0.0, 1.0]
    #[error("{field} out of range [0.0, 1.0]: {value}")]
    ValueRange { field: String, value: f64 },

    /// Step count that is negative or too large to run
    #[error(
        "invalid step count {0}: must be between 0 and {}",
        crate::driver::MAX_STEPS
    )]
    InvalidStepCount(i64),

    /// A finite stimulus source ran out before the requested steps
    #[error("stimulus source exhausted: requested {requested}, {available} available")]
    StimulusExhausted { requested: usize, available: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn value_range(field: impl Into<String>, value: f64) -> Self {
        SimError::ValueRange {
            field: field.into(),
            value,
        }
    }
}

/// Checks that `value` is a finite number in [0.0, 1.0].
pub fn check_unit_interval(field: &str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimError::value_range(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_unit_interval() {
        assert_eq!(check_unit_interval("belief", 0.0).unwrap(), 0.0);
        assert_eq!(check_unit_interval("belief", 1.0).unwrap(), 1.0);
        assert!(check_unit_interval("belief", -0.01).is_err());
        assert!(check_unit_interval("belief", 1.01).is_err());
        assert!(check_unit_interval("belief", f64::NAN).is_err());
        assert!(check_unit_interval("belief", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SimError::value_range("plasticity", 1.5);
        assert_eq!(err.to_string(), "plasticity out of range [0.0, 1.0]: 1.5");

        let err = SimError::InvalidStepCount(-3);
        assert_eq!(err.to_string(), "invalid step count -3: must be between 0 and 100000000");

        let err = SimError::StimulusExhausted {
            requested: 10,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "stimulus source exhausted: requested 10, 4 available"
        );
    }
}
