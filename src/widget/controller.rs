use tracing::debug;

use super::WidgetEvent;
use super::state::{Focus, WidgetState};
use crate::source::Person;
use crate::suggest::{self, MatchOptions};

/// The search widget: candidate list plus interaction state
///
/// Events go in through [`SearchWidget::handle`]; the view reads
/// [`SearchWidget::state`].
#[derive(Debug, Clone, Default)]
pub struct SearchWidget {
    candidates: Vec<Person>,
    candidates_loaded: bool,
    options: MatchOptions,
    state: WidgetState,
}

impl SearchWidget {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a widget whose candidates are already known
    pub fn with_candidates(options: MatchOptions, candidates: Vec<Person>) -> Self {
        let mut widget = Self::new(options);
        widget.set_candidates(candidates);
        widget
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn candidates(&self) -> &[Person] {
        &self.candidates
    }

    /// Whether the candidate fetch has settled
    pub fn candidates_loaded(&self) -> bool {
        self.candidates_loaded
    }

    /// Install the fetched candidates
    ///
    /// Only the first call has an effect. If the suggestion list is open
    /// while the fetch lands, its contents are refreshed.
    pub fn set_candidates(&mut self, candidates: Vec<Person>) {
        if self.candidates_loaded {
            debug!("Ignoring second candidate list");
            return;
        }
        self.candidates = candidates;
        self.candidates_loaded = true;

        if self.state.list_open && self.state.focus == Focus::Input {
            self.refresh_suggestions();
        }
    }

    /// Apply one event
    pub fn handle(&mut self, event: WidgetEvent) {
        debug!("Widget event: {:?}", event);
        match event {
            WidgetEvent::InputChanged(text) => self.set_input(text),
            WidgetEvent::InsertChar(c) => {
                self.ensure_input_focus();
                let mut text = self.state.input_text.clone();
                text.push(c);
                self.set_input(text);
            }
            WidgetEvent::Backspace => {
                self.ensure_input_focus();
                let mut text = self.state.input_text.clone();
                if text.pop().is_some() {
                    self.set_input(text);
                }
            }
            WidgetEvent::FocusInput => self.focus_input(),
            WidgetEvent::FocusSearchButton => {
                self.blur();
                self.state.focus = Focus::SearchButton;
            }
            WidgetEvent::Blur => {
                self.blur();
                self.state.focus = Focus::None;
            }
            WidgetEvent::Escape => self.escape(),
            WidgetEvent::Enter => match self.state.focus {
                Focus::SearchButton => self.search(),
                Focus::Input => self.enter(),
                Focus::None => {}
            },
            WidgetEvent::Up => self.move_up(),
            WidgetEvent::Down => self.move_down(),
            WidgetEvent::PointerDown(id) => self.state.pressed = Some(id),
            WidgetEvent::PointerUp(target) => self.pointer_up(target),
            WidgetEvent::ClickSuggestion(id) => self.click_suggestion(id),
            WidgetEvent::Search => self.search(),
        }
    }

    /// Text changed: recompute matches and reopen the list
    fn set_input(&mut self, text: String) {
        self.state.input_text = text;
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.state.suggestions =
            suggest::filter(&self.state.input_text, &self.candidates, self.options);
        self.state.list_open = true;
        self.state.active_index = None;
    }

    /// Focus gained behaves like a text change with the current text
    fn focus_input(&mut self) {
        self.state.focus = Focus::Input;
        self.refresh_suggestions();
    }

    fn ensure_input_focus(&mut self) {
        if self.state.focus != Focus::Input {
            self.focus_input();
        }
    }

    /// Dismiss the list, unless a press on it is still in progress
    fn blur(&mut self) {
        if self.state.pressed.is_some() {
            self.state.blur_pending = true;
            return;
        }
        self.dismiss_list();
    }

    fn dismiss_list(&mut self) {
        self.state.list_open = false;
        self.state.active_index = None;
        self.state.blur_pending = false;
    }

    fn clear_suggestions(&mut self) {
        self.state.suggestions = suggest::Suggestions::default();
        self.state.list_open = false;
        self.state.active_index = None;
    }

    /// Show `results` and close the suggestion list
    fn commit(&mut self, results: Vec<Person>) {
        debug!("Committing {} result(s)", results.len());
        self.state.selected_results = results;
        self.state.results_visible = true;
        self.clear_suggestions();
    }

    fn escape(&mut self) {
        if self.state.input_text.is_empty() {
            return;
        }
        self.clear_suggestions();
        self.state.input_text.clear();
    }

    fn enter(&mut self) {
        if self.state.input_text.is_empty() {
            return;
        }
        match self.state.active_suggestion().cloned() {
            Some(person) => self.commit_person(person),
            None => {
                let results = self.state.suggestions.all().to_vec();
                self.commit(results);
            }
        }
    }

    fn commit_person(&mut self, person: Person) {
        self.state.input_text = person.name.clone();
        self.commit(vec![person]);
    }

    /// Up from "none" jumps to the last row; up from the first row goes back
    /// to "none"
    fn move_up(&mut self) {
        if self.state.input_text.is_empty() {
            return;
        }
        let len = self.state.visible_suggestions().len();
        self.state.active_index = match self.state.active_index {
            None => len.checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Down from the last row goes back to "none"
    fn move_down(&mut self) {
        if self.state.input_text.is_empty() {
            return;
        }
        let len = self.state.visible_suggestions().len();
        self.state.active_index = match self.state.active_index {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) if i + 1 >= len => None,
            Some(i) => Some(i + 1),
        };
    }

    fn click_suggestion(&mut self, id: u64) {
        let clicked = self
            .state
            .visible_suggestions()
            .iter()
            .find(|p| p.id == id)
            .cloned();
        if let Some(person) = clicked {
            self.commit_person(person);
        }
    }

    /// Release of a pointer press: a click if it ends on the row it began on
    fn pointer_up(&mut self, target: Option<u64>) {
        let pressed = self.state.pressed.take();
        if let (Some(down), Some(up)) = (pressed, target) {
            if down == up {
                self.click_suggestion(up);
            }
        }
        if self.state.blur_pending {
            self.dismiss_list();
        }
    }

    fn search(&mut self) {
        if !suggest::is_searchable(&self.state.input_text) {
            return;
        }
        let results = self.state.suggestions.all().to_vec();
        self.commit(results);
    }
}
