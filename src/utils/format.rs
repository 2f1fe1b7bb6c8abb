use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Shown wherever a prayer time is not known.
pub const UNKNOWN_TIME: &str = "--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    fn period(&self, hour: u32) -> &'static str {
        let pm = hour >= 12;
        match (self, pm) {
            (Language::Arabic, false) => "ص",
            (Language::Arabic, true) => "م",
            (Language::English, false) => "AM",
            (Language::English, true) => "PM",
        }
    }
}

/// "13:05" → "1:05 م". Unknown times format to the placeholder.
pub fn format_time_12h(time: Option<NaiveTime>, lang: Language) -> String {
    let Some(t) = time else {
        return UNKNOWN_TIME.to_string();
    };
    let hours = t.hour();
    let hours12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hours12, t.minute(), lang.period(hours))
}

/// Parse a stored "HH:MM" time. Empty strings, the placeholder and anything
/// else that does not parse are unknown.
pub fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// Percentage with no decimals, as shown to the user.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Right-pad to a display width. Arabic labels are narrower than their byte
/// length suggests, so `{:<N}` misaligns them.
pub fn pad_display(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

/// Create a simple ASCII progress bar
pub fn progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_markers() {
        assert_eq!(format_time_12h(parse_hhmm("05:07"), Language::Arabic), "5:07 ص");
        assert_eq!(format_time_12h(parse_hhmm("13:30"), Language::Arabic), "1:30 م");
        assert_eq!(format_time_12h(parse_hhmm("00:15"), Language::Arabic), "12:15 ص");
        assert_eq!(format_time_12h(parse_hhmm("12:00"), Language::Arabic), "12:00 م");
    }

    #[test]
    fn english_markers() {
        assert_eq!(format_time_12h(parse_hhmm("18:45"), Language::English), "6:45 PM");
        assert_eq!(format_time_12h(parse_hhmm("09:05"), Language::English), "9:05 AM");
    }

    #[test]
    fn unknown_time_is_placeholder() {
        assert_eq!(format_time_12h(None, Language::Arabic), "--:--");
        assert_eq!(format_time_12h(parse_hhmm("--:--"), Language::Arabic), "--:--");
        assert_eq!(format_time_12h(parse_hhmm(""), Language::English), "--:--");
        assert_eq!(format_time_12h(parse_hhmm("25:99"), Language::English), "--:--");
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(format_percent(39.6), "40%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert_eq!(pad_display("abcdef", 4), "abcdef");
        assert_eq!(pad_display("العصر", 8).width(), 8);
    }

    #[test]
    fn progress_bar_widths() {
        assert_eq!(progress_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(progress_bar(0.0, 0.0, 3), "░░░");
        assert_eq!(progress_bar(150.0, 100.0, 4), "████");
    }
}
