//! Time duration formatting utilities for user-friendly display.
//!
//! This module provides formatting functions for converting time durations
//! into human-readable string representations. It's used throughout the
//! application for displaying focus time, pause durations, and reminder
//! thresholds in session views and reports.
//!
//! ## Format Specifications
//!
//! All durations follow the "HH:MM" pattern:
//! - Hours are zero-padded to 2 digits
//! - Minutes are zero-padded to 2 digits
//! - No seconds are displayed (rounded down to the minute)
//! - Negative durations are treated as "00:00"
//!
//! ## Examples
//!
//! ```rust
//! use tide::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! let duration = Duration::hours(2) + Duration::minutes(30);
//! assert_eq!(format_duration(&duration), "02:30");
//! ```

use chrono::Duration;

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// ## Formatting Rules
///
/// - **Hours**: Always displayed with at least 2 digits (zero-padded)
/// - **Minutes**: Always displayed with exactly 2 digits (zero-padded)
/// - **Seconds**: Not displayed (rounded down to the minute)
/// - **Negative**: Treated as zero duration ("00:00")
///
/// # Examples
///
/// ```rust
/// use tide::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Clamp negative components to zero so calculations that momentarily
    // go negative never render as garbage.
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a whole number of minutes as "HH:MM".
pub fn format_minutes(minutes: u64) -> String {
    format_duration(&Duration::minutes(minutes as i64))
}
