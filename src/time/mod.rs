//! Time string parsing and formatting.
//!
//! The canonical internal representation for every time quantity (finishing
//! times and paces alike) is an integer count of seconds. Parsing accepts
//! the free-form entry styles the calculator's time fields allow; formatting
//! renders seconds back with optional hour and day segments.

/// Seconds in one minute.
pub const SECS_PER_MINUTE: u64 = 60;

/// Seconds in one hour.
pub const SECS_PER_HOUR: u64 = 3600;

/// Seconds in one day.
pub const SECS_PER_DAY: u64 = 86_400;

/// Parse a free-form time string into total seconds.
///
/// Segments split on `:` when present, otherwise on whitespace. The segment
/// count decides the interpretation:
///
/// - 1 segment: decimal minutes (`"45"` → 2700, `"4.5"` → 270)
/// - 2 segments: `MM:SS`
/// - 3 segments: `H:MM:SS`
/// - 4 segments: `D:H:MM:SS`
///
/// Never fails: empty input and garbage segments degrade to 0, and range
/// checking is left to [`crate::validate`]. No upper bound is applied here.
pub fn parse_time(input: &str) -> u64 {
    let input = input.trim();
    if input.is_empty() {
        return 0;
    }

    let segments: Vec<&str> = if input.contains(':') {
        input.split(':').map(str::trim).collect()
    } else {
        input.split_whitespace().collect()
    };

    match segments.as_slice() {
        [minutes] => {
            let minutes: f64 = minutes.parse().unwrap_or(0.0);
            if !minutes.is_finite() || minutes <= 0.0 {
                0
            } else {
                (minutes * SECS_PER_MINUTE as f64).round() as u64
            }
        }
        // Saturating arithmetic: absurdly large segments clamp to a
        // large defined value that the range validators then reject.
        [m, s] => segment(m)
            .saturating_mul(SECS_PER_MINUTE)
            .saturating_add(segment(s)),
        [h, m, s] => segment(h)
            .saturating_mul(SECS_PER_HOUR)
            .saturating_add(segment(m).saturating_mul(SECS_PER_MINUTE))
            .saturating_add(segment(s)),
        [d, h, m, s] => segment(d)
            .saturating_mul(SECS_PER_DAY)
            .saturating_add(segment(h).saturating_mul(SECS_PER_HOUR))
            .saturating_add(segment(m).saturating_mul(SECS_PER_MINUTE))
            .saturating_add(segment(s)),
        // Five or more segments is not a time; degrade like other garbage.
        _ => 0,
    }
}

/// Parse one time segment; non-numeric or negative segments coerce to 0.
fn segment(token: &str) -> u64 {
    token.parse().unwrap_or(0)
}

/// Format seconds for display.
///
/// - `include_days` renders quantities past 24h as `"N day(s) HH:MM:SS"`.
/// - `include_hours` renders `HH:MM:SS`; hours are elapsed hours, not
///   wall-clock, so 99 hours renders as `99:59:59`.
/// - otherwise `MM:SS`, with any hours folded into the minutes field.
///
/// NaN and negative inputs render as `"00:00"`. Fractional seconds round to
/// the nearest whole second before formatting.
pub fn format_time(seconds: f64, include_hours: bool, include_days: bool) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.round() as u64;

    if include_days && total >= SECS_PER_DAY {
        let days = total / SECS_PER_DAY;
        let rem = total % SECS_PER_DAY;
        let noun = if days == 1 { "day" } else { "days" };
        return format!(
            "{} {} {:02}:{:02}:{:02}",
            days,
            noun,
            rem / SECS_PER_HOUR,
            (rem % SECS_PER_HOUR) / SECS_PER_MINUTE,
            rem % SECS_PER_MINUTE
        );
    }

    if include_hours && total >= SECS_PER_HOUR {
        return format!(
            "{:02}:{:02}:{:02}",
            total / SECS_PER_HOUR,
            (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            total % SECS_PER_MINUTE
        );
    }

    format!(
        "{:02}:{:02}",
        total / SECS_PER_MINUTE,
        total % SECS_PER_MINUTE
    )
}
