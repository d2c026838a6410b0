use crate::source::Person;
use crate::suggest::Suggestions;

/// Which part of the widget receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text input
    #[default]
    Input,
    /// The search button
    SearchButton,
    /// Nothing (terminal window lost focus)
    None,
}

/// Everything the view needs to draw the widget
///
/// All fields are recomputed from events; nothing here outlives the
/// widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    /// Current contents of the text input
    pub(crate) input_text: String,

    /// Matches for `input_text`
    pub(crate) suggestions: Suggestions,

    /// Whether the suggestion list is shown; a blur hides it without
    /// forgetting the matches
    pub(crate) list_open: bool,

    /// Index into the visible suggestions selected with the arrow keys
    pub(crate) active_index: Option<usize>,

    /// Committed results
    pub(crate) selected_results: Vec<Person>,

    /// Whether the results panel is shown
    pub(crate) results_visible: bool,

    pub(crate) focus: Focus,

    /// Suggestion under an in-progress pointer press
    pub(crate) pressed: Option<u64>,

    /// A blur arrived while the pointer was pressed on the list
    pub(crate) blur_pending: bool,
}

impl WidgetState {
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Every current match, uncapped
    pub fn suggestions(&self) -> &[Person] {
        self.suggestions.all()
    }

    /// The capped suggestion list as displayed; empty while the list is
    /// dismissed
    pub fn visible_suggestions(&self) -> &[Person] {
        if self.list_open {
            self.suggestions.visible()
        } else {
            &[]
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether the row at `index` is the keyboard-selected one
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    /// The keyboard-selected suggestion
    pub fn active_suggestion(&self) -> Option<&Person> {
        self.active_index
            .and_then(|i| self.visible_suggestions().get(i))
    }

    pub fn selected_results(&self) -> &[Person] {
        &self.selected_results
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether a pointer press on a suggestion is in progress
    pub fn is_pressing(&self) -> bool {
        self.pressed.is_some()
    }
}
