//! Table formatting for result lists using tabled

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Modify, Style, object::Columns, object::Rows, width::Width},
};

use crate::source::Person;

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;

const HEADERS: [&str; 4] = ["id", "name", "email", "phone"];

/// Table formatter for selected people
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Enable colored header
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(use_colors: bool) -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            use_colors,
        }
    }

    /// Set maximum column width
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Format people as a table
    ///
    /// Returns `None` for an empty list; the caller decides what to print
    /// instead.
    pub fn format(&self, people: &[Person]) -> Option<String> {
        if people.is_empty() {
            return None;
        }

        let mut builder = Builder::default();
        builder.push_record(HEADERS);
        for p in people {
            builder.push_record([
                p.id.to_string(),
                p.name.clone(),
                p.email.clone(),
                p.phone.clone(),
            ]);
        }

        let mut table = builder.build();
        self.apply_style(&mut table);
        Some(table.to_string())
    }

    fn apply_style(&self, table: &mut Table) {
        table.with(Style::modern());

        for i in 0..HEADERS.len() {
            table.with(Modify::new(Columns::new(i..=i)).with(Width::wrap(self.max_column_width)));
        }

        table.with(Modify::new(Rows::first()).with(Alignment::center()));

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::person;

    #[test]
    fn test_table_contains_rows() {
        let people = vec![
            person(1, "Leanne Graham", "Bret"),
            person(2, "Ervin Howell", "Antonette"),
        ];
        let output = TableFormatter::new(false).format(&people).unwrap();
        assert!(output.contains("Leanne Graham"));
        assert!(output.contains("antonette@example.com"));
        assert!(output.contains("phone"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_empty_is_none() {
        assert!(TableFormatter::new(false).format(&[]).is_none());
    }

    #[test]
    fn test_wraps_long_values() {
        let mut p = person(1, "Leanne Graham", "Bret");
        p.name = "x".repeat(30);
        let output = TableFormatter::new(false)
            .with_max_column_width(10)
            .format(&[p])
            .unwrap();
        assert!(!output.contains(&"x".repeat(11)));
    }
}
