//! Input validation for user-entered time and distance strings.
//!
//! Validators never panic and never return `Err`: every failure comes back
//! as a [`ValidationResult::Invalid`] carrying the exact message the UI
//! renders inline. Validation runs before calculation; the calculators in
//! [`crate::calculate`] stay crash-safe even when a caller skips it.

use crate::config::CalcLimits;
use crate::models::ValidationResult;
use crate::time::{parse_time, SECS_PER_DAY, SECS_PER_HOUR};

/// Validate a time string against the default limits.
///
/// `allow_multiday` raises the ceiling from 24 hours to 7 days. Both
/// ceilings are inclusive: exactly 24:00:00 (or 7:0:0:0) passes.
pub fn validate_time_input(input: &str, allow_multiday: bool) -> ValidationResult {
    validate_time_input_with(&CalcLimits::default(), input, allow_multiday)
}

/// Validate a time string against explicit limits.
pub fn validate_time_input_with(
    limits: &CalcLimits,
    input: &str,
    allow_multiday: bool,
) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::invalid("Time is required");
    }

    let seconds = parse_time(input);

    // Garbage input degrades to 0 in parse_time, so unparseable entries
    // fail here rather than with a dedicated format message.
    if seconds == 0 {
        return ValidationResult::invalid("Time must be greater than 0");
    }

    if allow_multiday {
        if seconds > limits.max_multiday_days * SECS_PER_DAY {
            return ValidationResult::invalid(format!(
                "Time cannot exceed {} days",
                limits.max_multiday_days
            ));
        }
    } else if seconds > limits.max_time_hours * SECS_PER_HOUR {
        return ValidationResult::invalid(format!(
            "Time cannot exceed {} hours",
            limits.max_time_hours
        ));
    }

    ValidationResult::valid(seconds as f64)
}

/// Validate a distance string against the default limits.
pub fn validate_distance_input(input: &str) -> ValidationResult {
    validate_distance_input_with(&CalcLimits::default(), input)
}

/// Validate a distance string against explicit limits.
///
/// The upper bound is inclusive: exactly `max_distance` passes.
pub fn validate_distance_input_with(limits: &CalcLimits, input: &str) -> ValidationResult {
    let input = input.trim();
    if input.is_empty() {
        return ValidationResult::invalid("Distance is required");
    }

    let value: f64 = match input.parse() {
        Ok(v) => v,
        Err(_) => return ValidationResult::invalid("Distance must be a valid number"),
    };

    if !value.is_finite() || value < 0.0 {
        return ValidationResult::invalid("Distance must be a valid number");
    }

    if value == 0.0 {
        return ValidationResult::invalid("Distance must be greater than 0");
    }

    if value > limits.max_distance {
        return ValidationResult::invalid("Distance seems unreasonably large");
    }

    ValidationResult::valid(value)
}
