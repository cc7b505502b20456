//! Race distance presets.

/// One row of the fixed race distance table.
///
/// `multiday` marks categories where finishers routinely take more than 24
/// hours, which switches the UI to day-segmented time entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceDistance {
    /// Display name (e.g. "Marathon", "100 Mile")
    pub label: &'static str,

    /// Nominal course distance in kilometers
    pub km: f64,

    /// Whether this category uses multi-day time entry
    pub multiday: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_distance_fields() {
        let race = RaceDistance {
            label: "Marathon",
            km: 42.195,
            multiday: false,
        };
        assert_eq!(race.label, "Marathon");
        assert_eq!(race.km, 42.195);
        assert!(!race.multiday);
    }
}
