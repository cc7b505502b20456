//! Personal record model and comparison math.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::format_time;

/// A personal record for one race distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Race label this record belongs to (e.g. "10K", "Marathon")
    pub label: String,

    /// Course distance in kilometers
    pub distance_km: f64,

    /// Finishing time in whole seconds
    pub time_seconds: u64,

    /// Pace in seconds per kilometer, derived at creation
    pub pace_per_km_seconds: f64,

    /// Date the record was set
    pub date: NaiveDate,
}

impl PersonalRecord {
    /// Create a new record, deriving the pace from time and distance.
    pub fn new(
        label: impl Into<String>,
        distance_km: f64,
        time_seconds: u64,
        date: NaiveDate,
    ) -> Self {
        let pace_per_km_seconds = if distance_km > 0.0 {
            time_seconds as f64 / distance_km
        } else {
            0.0
        };

        Self {
            label: label.into(),
            distance_km,
            time_seconds,
            pace_per_km_seconds,
            date,
        }
    }

    /// A strictly lower finishing time is better; ties are not improvements.
    pub fn is_better_than(&self, other: &PersonalRecord) -> bool {
        self.time_seconds < other.time_seconds
    }

    /// Seconds faster than `other` (0 when not faster).
    pub fn improvement_over(&self, other: &PersonalRecord) -> u64 {
        other.time_seconds.saturating_sub(self.time_seconds)
    }

    /// Finishing time formatted for display, day-segmented past 24 hours.
    pub fn formatted_time(&self) -> String {
        format_time(self.time_seconds as f64, true, true)
    }
}
