//! JSON formatting for result lists

use colored_json::prelude::*;

use crate::error::{PeopleSearchError, Result};
use crate::source::Person;

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool, use_colors: bool) -> Self {
        Self { pretty, use_colors }
    }

    /// Format people as a JSON array
    pub fn format(&self, people: &[Person]) -> Result<String> {
        let json_str = if self.pretty {
            serde_json::to_string_pretty(people)
        } else {
            serde_json::to_string(people)
        }
        .map_err(|e| PeopleSearchError::Generic(format!("JSON serialization failed: {e}")))?;

        // Compact JSON stays uncolored for piping
        if self.use_colors && self.pretty {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{parse_people, person};

    #[test]
    fn test_compact_json_parses_back() {
        let people = vec![person(1, "Ann", "ann"), person(2, "Andy", "andy")];
        let output = JsonFormatter::new(false, false).format(&people).unwrap();
        assert!(!output.contains('\n'));
        assert_eq!(parse_people(&output).unwrap(), people);
    }

    #[test]
    fn test_pretty_json() {
        let output = JsonFormatter::new(true, false)
            .format(&[person(1, "Ann", "ann")])
            .unwrap();
        assert!(output.contains("\n  {"));
        assert!(output.contains("\"username\": \"ann\""));
    }

    #[test]
    fn test_empty_array() {
        let output = JsonFormatter::new(false, false).format(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
