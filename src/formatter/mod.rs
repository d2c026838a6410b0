//! Output formatting for search results
//!
//! This module renders committed results outside the interactive widget:
//! - Cards, the same layout as the results panel
//! - Table formatting via `tabled`
//! - JSON (compact or pretty, colorized with `colored_json`)

pub mod cards;
pub mod colorizer;
pub mod json;
pub mod table;

pub use colorizer::Colorizer;
pub use json::JsonFormatter;
pub use table::TableFormatter;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;
use crate::source::Person;

/// Main formatter for search results
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Colorizer for output highlighting
    colorizer: Colorizer,
}

impl Formatter {
    /// Create a new formatter
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            colorizer: Colorizer::new(use_colors),
        }
    }

    /// Create a formatter from display configuration
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.format, config.color_output)
    }

    /// Format the results of searching for `query`
    pub fn format(&self, query: &str, people: &[Person]) -> Result<String> {
        let use_colors = self.colorizer.is_enabled();
        match self.format_type {
            OutputFormat::Cards => {
                Ok(cards::results_lines(query, people, &self.colorizer).join("\n"))
            }
            OutputFormat::Table => Ok(TableFormatter::new(use_colors)
                .format(people)
                .unwrap_or_else(|| cards::no_results_line(query, &self.colorizer))),
            OutputFormat::Json => JsonFormatter::new(false, use_colors).format(people),
            OutputFormat::JsonPretty => JsonFormatter::new(true, use_colors).format(people),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::person;

    #[test]
    fn test_cards_format() {
        let output = Formatter::new(OutputFormat::Cards, false)
            .format("an", &[person(1, "Ann", "ann")])
            .unwrap();
        assert!(output.starts_with("Ann\nEmail: ann@example.com"));
    }

    #[test]
    fn test_json_format_empty_is_array() {
        let output = Formatter::new(OutputFormat::Json, false)
            .format("zz", &[])
            .unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_table_format_empty_is_message() {
        let output = Formatter::new(OutputFormat::Table, false)
            .format("zz", &[])
            .unwrap();
        assert_eq!(output, "No results found for \"zz\"");
    }
}
