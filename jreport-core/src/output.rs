//! # Output Formatting
//!
//! Colored status lines for user-facing messages. Diagnostics go through
//! `tracing`; these are for the handful of lines a person running the report
//! is meant to read.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use owo_colors::OwoColorize;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("heavy_check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("x", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information_source", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Format a file path for display
pub fn format_path(path: &str) -> String {
  path.bright_green().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_emoji_fallback() {
    assert_eq!(get_emoji_or_default("definitely_not_an_emoji", "*"), "*");
  }

  #[test]
  fn test_status_emojis_resolve() {
    for shortcode in ["heavy_check_mark", "x", "information_source"] {
      assert_ne!(get_emoji_or_default(shortcode, "*"), "*", "unknown shortcode {shortcode}");
    }
  }

  #[test]
  fn test_format_path_keeps_text() {
    assert!(format_path("Team_Report_2024-03-05.xlsx").contains("Team_Report_2024-03-05.xlsx"));
  }
}
