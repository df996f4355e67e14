use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::config::Preferences;

#[derive(Debug, Clone)]
pub struct UiStyle {
    pub focus_marker: String,
    pub blur_marker: String,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub color_highlight: Option<Color>,
    pub color_error: Option<Color>,
    pub color_result: Option<Color>,
    pub plain_mode: bool,
}

impl UiStyle {
    /// Colour only when stdout is a terminal and plain mode is off.
    pub fn detect(prefs: &Preferences) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        Self::with_color(stdout_tty && !prefs.plain_mode)
    }

    /// No escape sequences at all; used for scripted sessions and tests.
    pub fn plain() -> Self {
        Self::with_color(false)
    }

    fn with_color(use_color: bool) -> Self {
        let pick = |color| if use_color { Some(color) } else { None };
        Self {
            focus_marker: "> ".into(),
            blur_marker: "  ".into(),
            use_color,
            color_header: pick(Color::BrightBlue),
            color_highlight: pick(Color::Cyan),
            color_error: pick(Color::BrightRed),
            color_result: pick(Color::BrightGreen),
            plain_mode: !use_color,
        }
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        self.paint(text, self.color_header, true)
    }

    pub fn apply_highlight_style(&self, text: &str) -> String {
        self.paint(text, self.color_highlight, false)
    }

    pub fn apply_error_style(&self, text: &str) -> String {
        self.paint(text, self.color_error, false)
    }

    pub fn apply_result_style(&self, text: &str) -> String {
        self.paint(text, self.color_result, true)
    }

    pub fn apply_placeholder_style(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, color: Option<Color>, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match (color, bold) {
            (Some(color), true) => text.color(color).bold().to_string(),
            (Some(color), false) => text.color(color).to_string(),
            (None, true) => text.bold().to_string(),
            (None, false) => text.to_string(),
        }
    }
}
