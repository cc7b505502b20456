//! Distance units and conversion constants.

use serde::{Deserialize, Serialize};

/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters in one international mile. Fixed constant, never re-derived.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Distance unit selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Km,
    Miles,
}

impl Unit {
    /// Meters in one unit of this distance unit.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Unit::Km => METERS_PER_KM,
            Unit::Miles => METERS_PER_MILE,
        }
    }

    /// Convert a value in this unit to meters.
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Km => write!(f, "km"),
            Unit::Miles => write!(f, "miles"),
        }
    }
}
