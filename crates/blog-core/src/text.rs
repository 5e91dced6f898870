//! Text helpers for article bodies and dates.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]+>").expect("static regex"))
}

/// Remove markup, leaving the text content.
pub fn strip_tags(html: &str) -> String {
    tag_pattern().replace_all(html, " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of the text content, with an ellipsis when cut.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_tags(html);
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `October 14, 2026`
pub fn format_long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// `October 14, 2026, 07:51:00 AM`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%B %d, %Y, %I:%M:%S %p").to_string()
}

/// Upper-cased first letter of a user name, `?` when there is none.
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Convert a UTF-16 offset (what the DOM reports for textarea selections)
/// into a char offset into `text`. Offsets past the end clamp to the length.
pub fn utf16_to_char_index(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return index;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>big</b></p><p>world</p>"), "Hello big world");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("<p>short</p>", 20), "short");
        assert_eq!(excerpt("<p>one two three</p>", 8), "one two...");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_dates() {
        let at = Utc.with_ymd_and_hms(2026, 10, 4, 7, 51, 0).unwrap();
        assert_eq!(format_long_date(&at), "October 4, 2026");
        assert_eq!(format_timestamp(&at), "October 04, 2026, 07:51:00 AM");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("james"), "J");
        assert_eq!(avatar_initial("  _x"), "X");
        assert_eq!(avatar_initial(""), "?");
    }

    #[test]
    fn test_utf16_offsets() {
        // the emoji is two UTF-16 units
        let text = "a😀b";
        assert_eq!(utf16_to_char_index(text, 0), 0);
        assert_eq!(utf16_to_char_index(text, 1), 1);
        assert_eq!(utf16_to_char_index(text, 3), 2);
        assert_eq!(utf16_to_char_index(text, 99), 3);
    }
}
