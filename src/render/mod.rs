// SPDX-License-Identifier: MIT

//! Pure markup renderers.
//!
//! Each view is a function from data to an HTML fragment string; the
//! Mini App frontend drops the fragment into its container element.
//! Nothing in this module performs I/O, so every renderer is
//! deterministic given its inputs (and an explicit `now` where recency
//! matters).

pub mod educator;
pub mod leaderboard;
pub mod progress;

pub use educator::render_settings_form;
pub use leaderboard::{render_leaderboard, render_leaderboard_shell};
pub use progress::render_class_progress;

/// Escape text for interpolation into markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline error block shown when a view cannot load.
pub fn render_error_state(message: &str) -> String {
    format!(
        "<div class=\"error-state\"><p>{}</p></div>",
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"A & B\"</b>"),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_error_state_escapes_message() {
        let markup = render_error_state("boom <script>");
        assert!(markup.contains("boom &lt;script&gt;"));
        assert!(markup.contains("error-state"));
    }
}
