//! # Pace Tracker
//!
//! A running pace/time/distance calculator with multi-day race support and
//! personal record tracking.
//!
//! ## Architecture
//!
//! - **models**: Core value types (units, validation results, records)
//! - **time**: Time string parsing and formatting
//! - **calculate**: Pace/time/distance conversion
//! - **validate**: Input validation with inline error messages
//! - **multiday**: Multi-day (>24h) entry policy
//! - **records**: Personal record comparison and JSON persistence
//! - **config**: Tunable limits loading and validation
//!
//! Everything outside `records` is a pure function over its arguments: no
//! shared state, no I/O, deterministic, safe to call from any thread.

pub mod calculate;
pub mod config;
pub mod models;
pub mod multiday;
pub mod records;
pub mod time;
pub mod validate;

pub use models::*;

#[cfg(test)]
mod tests {
    use crate::calculate::{calculate_pace, calculate_time};
    use crate::models::Unit;
    use crate::time::format_time;
    use crate::validate::{validate_distance_input, validate_time_input};

    // End-to-end flows the way the UI drives the library: validate both
    // inputs, calculate, format.

    #[test]
    fn test_pace_flow() {
        let time = validate_time_input("45:00", false);
        let distance = validate_distance_input("10");
        assert!(time.is_valid() && distance.is_valid());

        let pace = calculate_pace(time.value().unwrap(), distance.value().unwrap(), Unit::Km);
        assert_eq!(format_time(pace.pace_per_km, false, false), "04:30");
        assert_eq!(format_time(pace.pace_per_mile, false, false), "07:15");
    }

    #[test]
    fn test_race_time_flow() {
        // 6:00/km over a marathon.
        let seconds = calculate_time(360.0, 42.195, Unit::Km, Unit::Km);
        assert_eq!(format_time(seconds, true, false), "04:13:10");
    }

    #[test]
    fn test_multiday_race_flow() {
        // A 100-mile finish entered as D:H:MM:SS.
        let time = validate_time_input("1:4:30:00", true);
        assert!(time.is_valid());
        assert_eq!(
            format_time(time.value().unwrap(), true, true),
            "1 day 04:30:00"
        );
    }
}
