//! Pace, time, and distance conversion.
//!
//! Given any two of {time, pace, distance} these functions compute the
//! third. All arithmetic stays in floating point; rounding happens only at
//! display time in [`crate::time::format_time`]. Degenerate inputs (zero or
//! negative distance/pace) return zeroed results instead of dividing by
//! zero, so callers that skip validation still get a safe default.

use crate::models::{DistanceResult, PaceResult, Unit, METERS_PER_KM, METERS_PER_MILE};

/// Compute pace from a total time and a distance.
///
/// Both per-km and per-mile paces are always populated; `unit` only decides
/// how `distance` is interpreted going in.
pub fn calculate_pace(total_seconds: f64, distance: f64, unit: Unit) -> PaceResult {
    let meters = unit.to_meters(distance);
    if meters <= 0.0 {
        return PaceResult::zeroed();
    }

    PaceResult {
        pace_per_km: total_seconds / (meters / METERS_PER_KM),
        pace_per_mile: total_seconds / (meters / METERS_PER_MILE),
    }
}

/// Compute total time from a pace and a distance.
///
/// Pace and distance units convert independently, so a per-mile pace
/// composes with a km distance without any special casing.
pub fn calculate_time(
    pace_seconds: f64,
    distance: f64,
    pace_unit: Unit,
    distance_unit: Unit,
) -> f64 {
    let meters = distance_unit.to_meters(distance);
    let pace_per_meter = pace_seconds / pace_unit.meters_per_unit();
    meters * pace_per_meter
}

/// Compute distance from a total time and a pace, in both units.
pub fn calculate_distance(total_seconds: f64, pace_seconds: f64, pace_unit: Unit) -> DistanceResult {
    let pace_per_meter = pace_seconds / pace_unit.meters_per_unit();
    if pace_per_meter <= 0.0 {
        return DistanceResult::zeroed();
    }

    let meters = total_seconds / pace_per_meter;
    DistanceResult {
        km: meters / METERS_PER_KM,
        miles: meters / METERS_PER_MILE,
    }
}

/// Format a distance value for display with two decimal places.
pub fn format_distance(value: f64) -> String {
    format!("{:.2}", value)
}
