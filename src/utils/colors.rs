/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Lane colors for the day view, cycled by column index.
const LANES: [&str; 5] = [CYAN, GREEN, YELLOW, MAGENTA, BLUE];

pub fn for_lane(column: usize) -> &'static str {
    LANES[column % LANES.len()]
}

/// Truecolor foreground escape for a `#rgb` / `#rrggbb` employee color.
pub fn hex_to_ansi(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some(format!(
        "\x1b[38;2;{};{};{}m",
        channel(0)?,
        channel(2)?,
        channel(4)?
    ))
}

/// Paint `text` in an employee's color, or leave it plain.
pub fn paint_hex(text: &str, hex: &str) -> String {
    match hex_to_ansi(hex) {
        Some(code) => format!("{code}{text}{RESET}"),
        None => text.to_string(),
    }
}

/// Grey out empty placeholders such as "--" or "".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
