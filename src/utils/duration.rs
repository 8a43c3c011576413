//! Human-readable uptime rendering.
//!
//! Durations are rounded to the nearest whole second (halves round up) and
//! printed with the largest unit first, omitting leading zero units:
//!
//! ```text
//! 0.4s    -> 0s
//! 59.5s   -> 1m0s
//! 10921s  -> 3h2m1s
//! 90000s  -> 25h0m0s
//! ```

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Round `elapsed` to whole seconds.
pub fn round_to_seconds(elapsed: Duration) -> u64 {
    let rounded = (elapsed.as_nanos() + NANOS_PER_SEC / 2) / NANOS_PER_SEC;
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Format an elapsed duration as `XhYmZs`.
pub fn format_uptime(elapsed: Duration) -> String {
    let total = round_to_seconds(elapsed);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_rounds_to_zero() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
        assert_eq!(format_uptime(Duration::from_millis(499)), "0s");
    }

    #[test]
    fn half_second_rounds_up() {
        assert_eq!(format_uptime(Duration::from_millis(500)), "1s");
        assert_eq!(format_uptime(Duration::from_millis(59_500)), "1m0s");
    }

    #[test]
    fn minutes_and_hours_keep_inner_zeros() {
        assert_eq!(format_uptime(Duration::from_secs(59)), "59s");
        assert_eq!(format_uptime(Duration::from_secs(60)), "1m0s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 2 * 60 + 1)), "3h2m1s");
    }

    #[test]
    fn hours_do_not_roll_over_into_days() {
        assert_eq!(format_uptime(Duration::from_secs(25 * 3600)), "25h0m0s");
    }

    #[test]
    fn rendering_is_monotonic() {
        let mut previous = 0;
        for millis in (0..10_000_000u64).step_by(333_333) {
            let secs = round_to_seconds(Duration::from_millis(millis));
            assert!(secs >= previous);
            previous = secs;
        }
    }
}
