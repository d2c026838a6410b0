//! Non-interactive search
//!
//! Fetches the people list, runs a single query through the same widget the
//! interactive mode uses, and prints the committed results in the configured
//! output format.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{PeopleSearchError, Result};
use crate::formatter::Formatter;
use crate::source::{self, DataSource, Person};
use crate::suggest::{MIN_QUERY_CHARS, MatchOptions, is_searchable};
use crate::widget::{SearchWidget, WidgetEvent};

/// Run `query` against the configured source and print the results
pub async fn run(config: &Config, query: &str, show_progress: bool) -> Result<()> {
    if !is_searchable(query) {
        return Err(PeopleSearchError::Generic(format!(
            "Query must be at least {} characters",
            MIN_QUERY_CHARS
        )));
    }

    let source = source::from_config(&config.source)?;
    let people = fetch_with_spinner(source.as_ref(), show_progress).await?;

    let results = search(people, query, MatchOptions::from(&config.display));
    info!("Query {:?} selected {} result(s)", query, results.len());

    let formatter = Formatter::from_config(&config.display);
    println!("{}", formatter.format(query, &results)?);
    Ok(())
}

/// Commit `query` the way the Search action does and return the results
///
/// Unlike the interactive loader, fetch errors are not swallowed here; a
/// failed one-shot run exits non-zero.
pub fn search(people: Vec<Person>, query: &str, options: MatchOptions) -> Vec<Person> {
    let mut widget = SearchWidget::with_candidates(options, people);
    widget.handle(WidgetEvent::InputChanged(query.to_string()));
    widget.handle(WidgetEvent::Search);
    widget.state().selected_results().to_vec()
}

async fn fetch_with_spinner(source: &dyn DataSource, show_progress: bool) -> Result<Vec<Person>> {
    let spinner = show_progress.then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("Fetching people from {}", source.describe()));
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    });

    let result = source.fetch().await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let people = result?;
    debug!("Fetched {} people", people.len());
    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::person;
    use async_trait::async_trait;

    struct Fixed(Vec<Person>);

    #[async_trait]
    impl DataSource for Fixed {
        async fn fetch(&self) -> Result<Vec<Person>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn people() -> Vec<Person> {
        vec![
            person(1, "Ann", "annie"),
            person(2, "Andy", "andy_w"),
            person(3, "Bob", "bob"),
            person(4, "Clementine", "clem"),
        ]
    }

    #[test]
    fn test_search_commits_all_matches() {
        let results = search(people(), "an", MatchOptions::default());
        let ids: Vec<u64> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_search_is_not_capped_by_visible_limit() {
        let options = MatchOptions {
            max_visible: 1,
            match_username: true,
        };
        assert_eq!(search(people(), "an", options).len(), 2);
    }

    #[test]
    fn test_search_by_username() {
        let results = search(people(), "clem", MatchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Clementine");

        let name_only = MatchOptions {
            max_visible: 5,
            match_username: false,
        };
        assert!(search(people(), "annie", name_only).is_empty());
    }

    #[test]
    fn test_fetch_without_spinner() {
        let source = Fixed(people());
        let fetched = tokio_test::block_on(fetch_with_spinner(&source, false)).unwrap();
        assert_eq!(fetched.len(), 4);
    }

    #[tokio::test]
    async fn test_short_query_rejected() {
        let err = run(&Config::default(), "a", false).await.unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }
}
