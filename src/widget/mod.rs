//! Interaction controller for the search widget
//!
//! This module owns the widget's UI state and maps input events to state
//! transitions:
//! - Text changes and focus recompute suggestions and reset the active row
//! - Up/Down cycle the active row through the visible suggestions and "none"
//! - Enter, suggestion clicks and the search button commit results
//! - Escape clears the input; blur dismisses the list
//!
//! Blur never pre-empts a click: while a pointer press on the suggestion
//! list is in progress, dismissal waits for the release.

mod controller;
mod state;


pub use controller::SearchWidget;
pub use state::{Focus, WidgetState};

/// Input to the widget, independent of the terminal library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Replace the whole input text
    InputChanged(String),
    /// Append a character to the input
    InsertChar(char),
    /// Remove the last character of the input
    Backspace,
    /// The input gained focus
    FocusInput,
    /// Focus moved from the input to the search button
    FocusSearchButton,
    /// The widget lost focus
    Blur,
    Escape,
    Enter,
    Up,
    Down,
    /// Pointer pressed on the suggestion with this id
    PointerDown(u64),
    /// Pointer released, over the suggestion with this id if any
    PointerUp(Option<u64>),
    /// A suggestion was clicked
    ClickSuggestion(u64),
    /// The search button was clicked
    Search,
}
