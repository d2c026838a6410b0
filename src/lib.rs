//! People Search Library
//!
//! A terminal people-search box with live autocomplete. The list of people is
//! fetched once from a JSON endpoint (or file); typing two or more characters
//! suggests matching names and usernames, and committing a search shows the
//! matching people's contact details.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Result rendering (cards, table, JSON) and ANSI styling
//! - `oneshot`: Non-interactive search
//! - `source`: People data sources (HTTP endpoint, local file)
//! - `suggest`: Matching, filtering and highlighting
//! - `tui`: Interactive terminal front end
//! - `view`: Screen layout of the widget
//! - `widget`: Widget state machine
//!
//! # Example
//!
//! ```
//! use people_search::source::Person;
//! use people_search::suggest::MatchOptions;
//! use people_search::widget::{SearchWidget, WidgetEvent};
//!
//! let ann = Person {
//!     id: 1,
//!     name: "Ann".to_string(),
//!     username: "annie".to_string(),
//!     email: "ann@example.com".to_string(),
//!     phone: "555-0101".to_string(),
//! };
//!
//! let mut widget = SearchWidget::with_candidates(MatchOptions::default(), vec![ann]);
//! widget.handle(WidgetEvent::InputChanged("an".to_string()));
//! assert_eq!(widget.state().visible_suggestions().len(), 1);
//!
//! widget.handle(WidgetEvent::Enter);
//! assert_eq!(widget.state().selected_results()[0].name, "Ann");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod oneshot;
pub mod source;
pub mod suggest;
pub mod tui;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use config::Config;
pub use error::{PeopleSearchError, Result};
pub use formatter::Formatter;
pub use source::{DataSource, Person};
pub use widget::{SearchWidget, WidgetEvent, WidgetState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version
pub fn version() -> &'static str {
    VERSION
}
