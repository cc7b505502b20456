//! Tunable calculator limits.
//!
//! Every bound the validators and the multi-day policy apply lives here as
//! a named, loadable value rather than a magic number scattered through the
//! decision logic.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Validation ceilings and the multi-day entry heuristic threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcLimits {
    /// Largest accepted distance, in whichever unit the user entered
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,

    /// Single-day time ceiling in hours
    #[serde(default = "default_max_time_hours")]
    pub max_time_hours: u64,

    /// Multi-day time ceiling in days
    #[serde(default = "default_max_multiday_days")]
    pub max_multiday_days: u64,

    /// Typed-time threshold in hours past which multi-day entry is offered
    /// even for a non-ultra distance
    #[serde(default = "default_multiday_entry_threshold_hours")]
    pub multiday_entry_threshold_hours: u64,
}

fn default_max_distance() -> f64 {
    1000.0
}

fn default_max_time_hours() -> u64 {
    24
}

fn default_max_multiday_days() -> u64 {
    7
}

fn default_multiday_entry_threshold_hours() -> u64 {
    20
}

impl Default for CalcLimits {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            max_time_hours: default_max_time_hours(),
            max_multiday_days: default_max_multiday_days(),
            multiday_entry_threshold_hours: default_multiday_entry_threshold_hours(),
        }
    }
}

impl CalcLimits {
    /// Load limits from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let limits: CalcLimits = toml::from_str(&contents)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Validate the limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_distance <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Max distance must be greater than 0".to_string(),
            ));
        }

        if self.max_time_hours == 0 {
            return Err(ConfigError::ValidationError(
                "Single-day time ceiling must be greater than 0".to_string(),
            ));
        }

        if self.max_multiday_days * 24 <= self.max_time_hours {
            return Err(ConfigError::ValidationError(
                "Multi-day ceiling must exceed the single-day ceiling".to_string(),
            ));
        }

        if self.multiday_entry_threshold_hours >= self.max_time_hours {
            return Err(ConfigError::ValidationError(
                "Multi-day entry threshold must be below the single-day ceiling".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = CalcLimits::default();

        assert_eq!(limits.max_distance, 1000.0);
        assert_eq!(limits.max_time_hours, 24);
        assert_eq!(limits.max_multiday_days, 7);
        assert_eq!(limits.multiday_entry_threshold_hours, 20);
    }

    #[test]
    fn test_limits_validation_ok() {
        assert!(CalcLimits::default().validate().is_ok());
    }

    #[test]
    fn test_limits_validation_bad_distance() {
        let mut limits = CalcLimits::default();
        limits.max_distance = 0.0;

        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_limits_validation_inverted_ceilings() {
        let mut limits = CalcLimits::default();
        limits.max_multiday_days = 1;

        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_limits_validation_bad_threshold() {
        let mut limits = CalcLimits::default();
        limits.multiday_entry_threshold_hours = 24;

        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_limits_serialization() {
        let limits = CalcLimits::default();
        let toml_str = toml::to_string(&limits).unwrap();

        // Should be parseable
        let parsed: CalcLimits = toml::from_str(&toml_str).unwrap();
        assert_eq!(limits.max_distance, parsed.max_distance);
        assert_eq!(limits.max_time_hours, parsed.max_time_hours);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: CalcLimits = toml::from_str("multiday_entry_threshold_hours = 18").unwrap();
        assert_eq!(parsed.multiday_entry_threshold_hours, 18);
        assert_eq!(parsed.max_time_hours, 24);
    }
}
