//! Status messages and formatting for terminal output.
//!
//! Status lines go to stderr so they never mix with command output.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether status lines are colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(
        !no_color && crate::logger::should_use_colors(),
        Ordering::Relaxed,
    );
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if colors() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if colors() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if colors() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}

/// Format a byte count in kB the way bundlers report chunk sizes.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} kB", bytes as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_kb_uses_decimal_kilobytes() {
        assert_eq!(format_kb(0), "0.00 kB");
        assert_eq!(format_kb(1_500), "1.50 kB");
        assert_eq!(format_kb(1_234_567), "1234.57 kB");
    }
}
