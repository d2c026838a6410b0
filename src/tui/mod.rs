//! Interactive terminal front end
//!
//! Runs the search widget full-screen: the candidate fetch is spawned on
//! start, and the loop multiplexes its completion with terminal events,
//! repainting after each one. The widget accepts input while the fetch is in
//! flight; it simply has nothing to suggest yet.

mod input;
mod terminal;

use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{PeopleSearchError, Result};
use crate::formatter::Colorizer;
use crate::source::{self, DataSource};
use crate::suggest::MatchOptions;
use crate::view;
use crate::widget::SearchWidget;

pub use input::{Action, translate};
pub use terminal::TerminalGuard;

/// Run the widget until the user quits
pub async fn run(config: &Config, source: Arc<dyn DataSource>) -> Result<()> {
    let mut widget = SearchWidget::new(MatchOptions::from(&config.display));
    let colorizer = Colorizer::new(config.display.color_output);

    let mut pending = source::spawn_load(source);
    let mut loaded = false;

    let mut terminal = TerminalGuard::enter()?;
    let mut events = EventStream::new();

    let (width, height) = terminal.size();
    let mut frame = view::render(widget.state(), &colorizer, width, height);
    terminal.draw(&frame)?;

    loop {
        tokio::select! {
            people = &mut pending, if !loaded => {
                loaded = true;
                // A dropped sender means the loader task died; treat as no data.
                widget.set_candidates(people.unwrap_or_default());
            }
            event = events.next() => {
                let event = match event {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => {
                        return Err(PeopleSearchError::Terminal(format!(
                            "Failed to read event: {e}"
                        )));
                    }
                    None => break,
                };

                match translate(&event, widget.state(), &frame) {
                    Action::Widget(e) => widget.handle(e),
                    Action::Redraw { width, height } => terminal.resize(width, height),
                    Action::Quit => break,
                    Action::Ignore => continue,
                }
            }
        }

        let (width, height) = terminal.size();
        frame = view::render(widget.state(), &colorizer, width, height);
        terminal.draw(&frame)?;
    }

    debug!("Leaving interactive widget");
    info!(
        "Session ended with {} result(s) shown",
        widget.state().selected_results().len()
    );
    Ok(())
}
