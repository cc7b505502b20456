//! Calculator output types.

use serde::{Deserialize, Serialize};

/// Pace computed from a time and a distance.
///
/// Both fields are always populated so callers can display either unit
/// without recomputing. Values are seconds per km/mile, un-rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PaceResult {
    pub pace_per_km: f64,
    pub pace_per_mile: f64,
}

impl PaceResult {
    /// The safe default returned for degenerate (zero/negative) distances.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// Distance computed from a time and a pace, in both units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DistanceResult {
    pub km: f64,
    pub miles: f64,
}

impl DistanceResult {
    /// The safe default returned for degenerate (zero/negative) paces.
    pub fn zeroed() -> Self {
        Self::default()
    }
}
