/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Pending items in yellow, completed ones in green.
pub fn colorize_pending(pending: bool) -> String {
    if pending {
        format!("{YELLOW}yes{RESET}")
    } else {
        format!("{GREEN}no{RESET}")
    }
}

/// Grey placeholder for empty cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
