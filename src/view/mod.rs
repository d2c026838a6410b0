//! Frame layout for the interactive widget
//!
//! [`render`] turns a [`WidgetState`] into a list of styled lines plus the
//! screen regions that respond to the pointer. The terminal layer draws the
//! lines and uses [`Frame::target_at`] to turn mouse positions back into
//! widget events.

use crate::formatter::{Colorizer, cards};
use crate::suggest::highlight;
use crate::widget::{Focus, WidgetState};

const TITLE: &str = "LOOKING FOR AN EMPLOYEE?";
const RESULTS_TITLE: &str = "SEARCH RESULTS";
const HINT: &str = "Click on the search bar to learn our suggestions";
const PLACEHOLDER: &str = "Search...";
const BUTTON: &str = "[ Search ]";
const PROMPT: &str = "> ";
const MARGIN: usize = 2;

/// Row of the input line
pub const INPUT_ROW: u16 = 4;

const MIN_FIELD_WIDTH: usize = 12;
const MAX_FIELD_WIDTH: usize = 48;

/// Something on screen that reacts to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    SearchButton,
    Suggestion(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    row: u16,
    cols: std::ops::Range<u16>,
    target: HitTarget,
}

/// A laid-out screen
#[derive(Debug, Clone, Default)]
pub struct Frame {
    lines: Vec<String>,
    regions: Vec<Region>,
    cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position `(column, row)` when the input has focus
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// What lies under the cell at `(column, row)`
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .find(|r| r.row == row && r.cols.contains(&column))
            .map(|r| r.target)
    }

    fn push(&mut self, line: String) -> u16 {
        self.lines.push(line);
        (self.lines.len() - 1) as u16
    }

    fn region(&mut self, row: u16, start: usize, len: usize, target: HitTarget) {
        let start = start as u16;
        self.regions.push(Region {
            row,
            cols: start..start.saturating_add(len as u16),
            target,
        });
    }
}

fn field_width(width: u16) -> usize {
    (width as usize)
        .saturating_sub(MARGIN * 2 + PROMPT.len() + BUTTON.len() + 2)
        .clamp(MIN_FIELD_WIDTH, MAX_FIELD_WIDTH)
}

/// Last `width` characters of `text`
fn tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    let start = text.char_indices().nth(skip).map(|(i, _)| i).unwrap_or(0);
    &text[start..]
}

fn pad(text: &str, width: usize) -> String {
    let count = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(count)))
}

/// Lay out the widget for a terminal `width` columns wide and `height` rows
/// tall
pub fn render(state: &WidgetState, colorizer: &Colorizer, width: u16, height: u16) -> Frame {
    let mut frame = Frame::default();
    let indent = " ".repeat(MARGIN);

    frame.push(String::new());
    if state.results_visible() {
        frame.push(format!("{indent}{}", colorizer.title(RESULTS_TITLE)));
        frame.push(String::new());
    } else {
        frame.push(format!("{indent}{}", colorizer.title(TITLE)));
        frame.push(format!("{indent}{}", colorizer.dim(HINT)));
    }
    frame.push(String::new());

    render_input_line(&mut frame, state, colorizer, width);
    render_suggestions(&mut frame, state, colorizer, width);

    if state.results_visible() {
        frame.push(String::new());
        for line in cards::results_lines(state.input_text(), state.selected_results(), colorizer) {
            if line.is_empty() {
                frame.push(line);
            } else {
                frame.push(format!("{indent}{line}"));
            }
        }
    }

    truncate(&mut frame, height);
    frame
}

fn render_input_line(frame: &mut Frame, state: &WidgetState, colorizer: &Colorizer, width: u16) {
    let field = field_width(width);
    let text = tail(state.input_text(), field);
    let shown = if text.is_empty() {
        colorizer.dim(&pad(PLACEHOLDER, field))
    } else {
        pad(text, field)
    };

    let button = if state.focus() == Focus::SearchButton {
        colorizer.focused(BUTTON)
    } else {
        BUTTON.to_string()
    };

    let row = frame.push(format!(
        "{}{}{}  {}",
        " ".repeat(MARGIN),
        PROMPT,
        shown,
        button
    ));
    debug_assert_eq!(row, INPUT_ROW);

    let input_start = MARGIN;
    let button_start = MARGIN + PROMPT.len() + field + 2;
    frame.region(row, input_start, PROMPT.len() + field, HitTarget::Input);
    frame.region(row, button_start, BUTTON.len(), HitTarget::SearchButton);

    if state.focus() == Focus::Input {
        let col = MARGIN + PROMPT.len() + text.chars().count();
        frame.cursor = Some((col as u16, row));
    }
}

fn render_suggestions(frame: &mut Frame, state: &WidgetState, colorizer: &Colorizer, width: u16) {
    let field = field_width(width);
    let start = MARGIN + PROMPT.len();

    for (index, person) in state.visible_suggestions().iter().enumerate() {
        let rendered: String = highlight(&person.name, state.input_text())
            .segments()
            .iter()
            .map(|s| {
                if s.emphasized {
                    colorizer.emphasis(s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect();
        let padding = " ".repeat(field.saturating_sub(person.name.chars().count()));
        let cell = format!("{rendered}{padding}");
        let cell = if state.is_active(index) {
            colorizer.active_row(&cell)
        } else {
            cell
        };

        let row = frame.push(format!("{}{}", " ".repeat(start), cell));
        frame.region(row, start, field, HitTarget::Suggestion(person.id));
    }
}

/// Drop lines that do not fit, leaving a marker on the last row
fn truncate(frame: &mut Frame, height: u16) {
    let height = height as usize;
    if height == 0 || frame.lines.len() <= height {
        return;
    }
    let hidden = frame.lines.len() - (height - 1);
    frame.lines.truncate(height - 1);
    frame
        .lines
        .push(format!("{}... {} more line(s)", " ".repeat(MARGIN), hidden));
    frame.regions.retain(|r| (r.row as usize) < height - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Person, person};
    use crate::suggest::MatchOptions;
    use crate::widget::{SearchWidget, WidgetEvent};

    fn widget_with(text: &str) -> SearchWidget {
        let candidates: Vec<Person> = vec![
            person(1, "Leanne Graham", "Bret"),
            person(2, "Ervin Howell", "Antonette"),
            person(7, "Kurtis Weissnat", "Elwyn.Skiles"),
        ];
        let mut w = SearchWidget::with_candidates(MatchOptions::default(), candidates);
        w.handle(WidgetEvent::InputChanged(text.to_string()));
        w
    }

    fn plain(state: &WidgetState) -> Frame {
        render(state, &Colorizer::new(false), 80, 40)
    }

    #[test]
    fn test_initial_frame() {
        let w = widget_with("");
        let frame = plain(w.state());
        assert_eq!(frame.lines()[1], "  LOOKING FOR AN EMPLOYEE?");
        assert!(frame.lines()[2].contains(HINT));
        assert!(frame.lines()[INPUT_ROW as usize].contains(PLACEHOLDER));
        assert!(frame.lines()[INPUT_ROW as usize].contains(BUTTON));
        assert_eq!(frame.cursor(), Some((4, INPUT_ROW)));
    }

    #[test]
    fn test_suggestion_rows_are_targets() {
        let w = widget_with("ti");
        let frame = plain(w.state());
        // "ti" matches Kurtis Weissnat by name, then nobody else
        assert_eq!(frame.lines().len(), INPUT_ROW as usize + 2);
        assert!(frame.lines()[5].contains("Kurtis Weissnat"));
        assert_eq!(frame.target_at(6, 5), Some(HitTarget::Suggestion(7)));
        assert_eq!(frame.target_at(0, 5), None);
    }

    #[test]
    fn test_input_and_button_targets() {
        let w = widget_with("");
        let frame = plain(w.state());
        assert_eq!(frame.target_at(3, INPUT_ROW), Some(HitTarget::Input));

        let line = &frame.lines()[INPUT_ROW as usize];
        let col = line.find(BUTTON).unwrap() as u16;
        assert_eq!(frame.target_at(col + 1, INPUT_ROW), Some(HitTarget::SearchButton));
    }

    #[test]
    fn test_highlight_is_styled_when_colored() {
        let w = widget_with("gra");
        let frame = render(w.state(), &Colorizer::new(true), 80, 40);
        assert!(frame.lines()[5].contains('\x1b'));
        assert!(frame.lines()[5].contains("Gra"));
    }

    #[test]
    fn test_results_panel() {
        let mut w = widget_with("ervin");
        w.handle(WidgetEvent::Enter);
        let frame = plain(w.state());
        assert_eq!(frame.lines()[1], "  SEARCH RESULTS");
        assert!(frame.lines().iter().any(|l| l == "  Ervin Howell"));
        assert!(frame.lines().iter().any(|l| l.contains("Email: antonette@example.com")));
    }

    #[test]
    fn test_no_results_message() {
        let mut w = widget_with("zz");
        w.handle(WidgetEvent::Search);
        let frame = plain(w.state());
        let expected = "No results found for \"zz\"";
        assert!(frame.lines().iter().any(|l| l.contains(expected)));
    }

    #[test]
    fn test_truncates_to_height() {
        let mut w = widget_with("e");
        w.handle(WidgetEvent::InputChanged("an".to_string()));
        w.handle(WidgetEvent::Enter);
        let frame = render(w.state(), &Colorizer::new(false), 80, 8);
        assert_eq!(frame.lines().len(), 8);
        assert!(frame.lines()[7].contains("more line(s)"));
    }

    #[test]
    fn test_tail_keeps_end_of_long_input() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("ab", 3), "ab");
        assert_eq!(tail("ééé", 2), "éé");
    }
}
