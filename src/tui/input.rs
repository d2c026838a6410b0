//! Translation of terminal events into widget events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::view::{Frame, HitTarget};
use crate::widget::{Focus, WidgetEvent, WidgetState};

/// What the event loop should do with a terminal event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Feed this event to the widget
    Widget(WidgetEvent),
    /// Nothing changed in the widget, but the screen must be repainted
    Redraw { width: u16, height: u16 },
    /// Leave the widget
    Quit,
    Ignore,
}

/// Map a terminal event, given the current state and the last drawn frame
pub fn translate(event: &Event, state: &WidgetState, frame: &Frame) -> Action {
    match event {
        Event::Key(key) => translate_key(key, state),
        Event::Mouse(mouse) => translate_mouse(mouse, frame),
        Event::FocusGained => Action::Widget(WidgetEvent::FocusInput),
        Event::FocusLost => Action::Widget(WidgetEvent::Blur),
        Event::Resize(width, height) => Action::Redraw {
            width: *width,
            height: *height,
        },
        // The input is a single line; line breaks in a paste are dropped
        Event::Paste(text) => {
            let mut input = state.input_text().to_string();
            input.extend(text.chars().filter(|c| !c.is_control()));
            Action::Widget(WidgetEvent::InputChanged(input))
        }
    }
}

fn translate_key(key: &KeyEvent, state: &WidgetState) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => return Action::Quit,
        KeyCode::Char('u') if ctrl => WidgetEvent::InputChanged(String::new()),
        KeyCode::Char(_) if ctrl => return Action::Ignore,
        KeyCode::Char(c) => WidgetEvent::InsertChar(c),
        KeyCode::Backspace => WidgetEvent::Backspace,
        KeyCode::Tab | KeyCode::BackTab => match state.focus() {
            Focus::Input => WidgetEvent::FocusSearchButton,
            Focus::SearchButton | Focus::None => WidgetEvent::FocusInput,
        },
        KeyCode::Esc => WidgetEvent::Escape,
        KeyCode::Enter => WidgetEvent::Enter,
        KeyCode::Up => WidgetEvent::Up,
        KeyCode::Down => WidgetEvent::Down,
        _ => return Action::Ignore,
    };
    Action::Widget(event)
}

fn translate_mouse(mouse: &MouseEvent, frame: &Frame) -> Action {
    let target = frame.target_at(mouse.column, mouse.row);
    let event = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match target {
            Some(HitTarget::Suggestion(id)) => WidgetEvent::PointerDown(id),
            Some(HitTarget::SearchButton) => WidgetEvent::Search,
            Some(HitTarget::Input) => WidgetEvent::FocusInput,
            None => WidgetEvent::Blur,
        },
        MouseEventKind::Up(MouseButton::Left) => match target {
            Some(HitTarget::Suggestion(id)) => WidgetEvent::PointerUp(Some(id)),
            _ => WidgetEvent::PointerUp(None),
        },
        _ => return Action::Ignore,
    };
    Action::Widget(event)
}
