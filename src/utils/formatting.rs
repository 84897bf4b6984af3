//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ansi pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Visible width, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// "45m", "1h", "1h 30m"
pub fn mins2readable(mins: u32) -> String {
    match (mins / 60, mins % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}

/// Percent with one decimal, e.g. "31.3%".
pub fn pct(v: f64) -> String {
    format!("{v:.1}%")
}

pub fn px(v: f64) -> String {
    format!("{v:.0}px")
}
