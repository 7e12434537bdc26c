//! Display formatting for message timestamps
//!
//! Pure helpers for the chat surface: timestamp in, display string out, no
//! side effects.

use chrono::{DateTime, Local, Timelike, Utc};

/// Wall-clock "HH:MM" rendering in the viewer's local time.
pub fn absolute(timestamp: DateTime<Utc>) -> String {
    let local = timestamp.with_timezone(&Local);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

/// Coarse "how long ago" rendering relative to `now`. Timestamps slightly
/// in the future (clock skew) read as "just now".
pub fn relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    if elapsed.num_seconds() < 45 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes.max(1));
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", elapsed.num_days())
}
