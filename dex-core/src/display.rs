//! Display helpers for catalog data.
//!
//! Pure string transformations shared by every front end so names, ids and
//! timestamps render the same way everywhere.

use chrono::{DateTime, Utc};

/// Capitalize the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Turn an upstream slug into a display name: `"mr-mime"` → `"Mr Mime"`.
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Zero-pad an id to at least three digits: `25` → `"025"`.
pub fn format_id(id: u32) -> String {
    format!("{:03}", id)
}

/// Render an RFC 3339 timestamp as `Dec 25, 2023, 02:30 PM` (UTC).
///
/// Unparsable input is returned unchanged.
pub fn format_saved_at(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Render an RFC 3339 timestamp as `Dec 25, 2023` (UTC).
pub fn format_saved_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Truncate to at most `max_len` characters, ending with `suffix` when cut.
pub fn truncate(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
