//! Color output support for terminal formatting
//!
//! Styles are expressed with `nu_ansi_term`. Every method degrades to plain
//! text when colors are disabled so the same rendering code serves `--no-color`
//! and piped output.

use nu_ansi_term::{Color, Style};

/// OSC 8 hyperlink escape sequences
pub struct Osc8;

impl Osc8 {
    pub const OPEN: &'static str = "\x1b]8;;";
    pub const TERMINATOR: &'static str = "\x1b\\";
}

/// Background of the keyboard-selected suggestion row
const ACTIVE_ROW_BG: Color = Color::Rgb(232, 231, 231);

/// Color scheme for widget and result output
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    /// Enable colors
    enabled: bool,
}

impl Colorizer {
    /// Create a new colorizer
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Widget heading (bold)
    pub fn title(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    /// Secondary text such as hints and placeholders (dimmed)
    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::new().dimmed(), text)
    }

    /// Matched part of a suggestion (bold, yellow)
    pub fn emphasis(&self, text: &str) -> String {
        self.paint(Color::Yellow.bold(), text)
    }

    /// Person name on a result card (bold)
    pub fn name(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    /// Field label on a result card (cyan)
    pub fn label(&self, text: &str) -> String {
        self.paint(Color::Cyan.normal(), text)
    }

    /// "No results" message (yellow)
    pub fn warning(&self, text: &str) -> String {
        self.paint(Color::Yellow.normal(), text)
    }

    /// Focused control (reversed)
    pub fn focused(&self, text: &str) -> String {
        self.paint(Style::new().reverse(), text)
    }

    /// Shade an already-rendered suggestion row
    ///
    /// Resets emitted by inner segments would end the background early, so
    /// the background is re-applied after each of them.
    pub fn active_row(&self, rendered: &str) -> String {
        if !self.enabled {
            return rendered.to_string();
        }
        let style = Style::new().on(ACTIVE_ROW_BG).fg(Color::Black);
        let prefix = style.prefix().to_string();
        let reset = "\x1b[0m";
        format!(
            "{}{}{}",
            prefix,
            rendered.replace(reset, &format!("{reset}{prefix}")),
            reset
        )
    }

    /// Terminal hyperlink (underlined blue) pointing at `url`
    pub fn link(&self, text: &str, url: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!(
            "{}{}{}{}{}{}",
            Osc8::OPEN,
            url,
            Osc8::TERMINATOR,
            Color::Blue.underline().paint(text),
            Osc8::OPEN,
            Osc8::TERMINATOR
        )
    }
}
