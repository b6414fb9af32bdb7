//! Time utilities for rpki
//!
//! Provides the clock reading and elapsed-time formatting used by the
//! session report.

use std::time::{SystemTime, UNIX_EPOCH};

/// Get the current Unix timestamp in seconds.
///
/// Returns 0 if the system clock reads before the Unix epoch.
pub fn current_time_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Seconds elapsed between `since` and `now`, both Unix timestamps.
///
/// Negative when `since` lies in the future.
pub fn elapsed_secs(since: i64, now: i64) -> i64 {
    now.saturating_sub(since)
}

/// Format a number of seconds as `HH:MM:SS`, prefixed with `<days>d ` once
/// the span reaches a day.
///
/// # Examples
/// ```
/// use rpki_core::time::format_timedelta;
///
/// assert_eq!(format_timedelta(3725), "01:02:05");
/// assert_eq!(format_timedelta(90061), "1d 01:01:01");
/// ```
pub fn format_timedelta(secs: i64) -> String {
    let mut u = secs.unsigned_abs();
    let s = u % 60;
    u /= 60;
    let m = u % 60;
    u /= 60;
    let h = u % 24;
    let days = u / 24;

    let clock = format!("{:02}:{:02}:{:02}", h, m, s);
    let sign = if secs < 0 { "-" } else { "" };
    if days == 0 {
        format!("{}{}", sign, clock)
    } else {
        format!("{}{}d {}", sign, days, clock)
    }
}
