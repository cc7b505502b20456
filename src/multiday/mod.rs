//! Multi-day entry policy.
//!
//! Decides when the day-segmented time entry (past 24 hours, up to 7 days)
//! applies: either the selected distance belongs to a known multi-day race
//! category, or the user has already typed a time beyond the entry
//! threshold.

use crate::config::CalcLimits;
use crate::models::RaceDistance;
use crate::time::SECS_PER_HOUR;

/// Known race distances.
///
/// Classification is by category, not by a numeric threshold: 50K and
/// 50-mile are ultras but typically finish under 24 hours, so they stay
/// single-day. The timed categories (24h/48h/6-day) carry nominal course
/// distances for preset lookup.
pub const RACE_DISTANCES: &[RaceDistance] = &[
    RaceDistance {
        label: "5K",
        km: 5.0,
        multiday: false,
    },
    RaceDistance {
        label: "10K",
        km: 10.0,
        multiday: false,
    },
    RaceDistance {
        label: "Half Marathon",
        km: 21.0975,
        multiday: false,
    },
    RaceDistance {
        label: "Marathon",
        km: 42.195,
        multiday: false,
    },
    RaceDistance {
        label: "50K",
        km: 50.0,
        multiday: false,
    },
    RaceDistance {
        label: "50 Mile",
        km: 80.4672,
        multiday: false,
    },
    RaceDistance {
        label: "100K",
        km: 100.0,
        multiday: true,
    },
    RaceDistance {
        label: "100 Mile",
        km: 160.9344,
        multiday: true,
    },
    RaceDistance {
        label: "24 Hour",
        km: 200.0,
        multiday: true,
    },
    RaceDistance {
        label: "48 Hour",
        km: 350.0,
        multiday: true,
    },
    RaceDistance {
        label: "6 Day",
        km: 900.0,
        multiday: true,
    },
];

/// Relative tolerance when matching an entered distance against a preset.
/// Absorbs rounding like 21.1 for the half marathon's 21.0975.
const MATCH_TOLERANCE: f64 = 0.005;

/// Look up the race preset matching a distance in kilometers.
pub fn find_race_distance(km: f64) -> Option<&'static RaceDistance> {
    RACE_DISTANCES
        .iter()
        .find(|race| (race.km - km).abs() <= race.km * MATCH_TOLERANCE)
}

/// Whether a distance belongs to a multi-day race category.
pub fn is_multiday_distance(km: f64) -> bool {
    find_race_distance(km).is_some_and(|race| race.multiday)
}

/// Whether multi-day time entry should be offered, using default limits.
pub fn should_allow_multiday(km: f64, current_time_seconds: f64) -> bool {
    should_allow_multiday_with(&CalcLimits::default(), km, current_time_seconds)
}

/// Whether multi-day time entry should be offered, using explicit limits.
///
/// UI-assist heuristic, intentionally permissive: a typed time past the
/// entry threshold enables multi-day entry even for a non-ultra nominal
/// distance. False positives only cost an extra entry field; false
/// negatives would block a legitimate finishing time.
pub fn should_allow_multiday_with(
    limits: &CalcLimits,
    km: f64,
    current_time_seconds: f64,
) -> bool {
    is_multiday_distance(km)
        || current_time_seconds > (limits.multiday_entry_threshold_hours * SECS_PER_HOUR) as f64
}
