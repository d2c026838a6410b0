//! Candidate sources for the search widget
//!
//! The widget loads its candidate list exactly once, asynchronously, when it
//! starts. Sources implement [`DataSource`]; the loader wraps a source so that
//! a failed fetch degrades to an empty list instead of an error, and the
//! interactive loop keeps working (with no suggestions) while the fetch is in
//! flight.

mod file;
mod http;
mod person;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::error::Result;

pub use file::FileSource;
pub use http::HttpSource;
pub use person::{Person, parse_people};

#[cfg(test)]
pub(crate) use person::person;

/// Something that can produce the candidate list
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every candidate
    async fn fetch(&self) -> Result<Vec<Person>>;

    /// Short human-readable description, used in logs
    fn describe(&self) -> String;
}

/// Build the source described by configuration
///
/// A configured file takes precedence over the URL.
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn DataSource>> {
    match &config.file {
        Some(path) => Ok(Arc::new(FileSource::new(path.clone()))),
        None => Ok(Arc::new(HttpSource::from_config(config)?)),
    }
}

/// Fetch candidates, logging and swallowing any failure
///
/// # Returns
/// * `Vec<Person>` - The candidates, or an empty list if the fetch failed
pub async fn load_candidates(source: &dyn DataSource) -> Vec<Person> {
    match source.fetch().await {
        Ok(people) => {
            info!("Loaded {} candidates from {}", people.len(), source.describe());
            people
        }
        Err(e) => {
            warn!("Failed to load candidates from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}

/// Run [`load_candidates`] on a background task
///
/// The receiver resolves once the fetch settles. It never resolves to an
/// error other than the task being dropped, which callers treat as "no data".
pub fn spawn_load(source: Arc<dyn DataSource>) -> oneshot::Receiver<Vec<Person>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let people = load_candidates(source.as_ref()).await;
        // The widget may have exited before the fetch settled.
        let _ = tx.send(people);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    struct StaticSource(Vec<Person>);

    #[async_trait]
    impl DataSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<Person>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Person>> {
            Err(SourceError::HttpStatus(500).into())
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_candidates_success() {
        let source = StaticSource(vec![person(1, "Ann", "ann")]);
        let people = load_candidates(&source).await;
        assert_eq!(people.len(), 1);
    }

    #[tokio::test]
    async fn test_load_candidates_failure_is_empty() {
        let people = load_candidates(&FailingSource).await;
        assert!(people.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_load_delivers() {
        let source: Arc<dyn DataSource> =
            Arc::new(StaticSource(vec![person(1, "Ann", "ann"), person(2, "Bo", "bo")]));
        let people = spawn_load(source).await.unwrap();
        assert_eq!(people.len(), 2);
    }

    #[tokio::test]
    async fn test_spawn_load_failure_delivers_empty() {
        let people = spawn_load(Arc::new(FailingSource)).await.unwrap();
        assert!(people.is_empty());
    }

    #[test]
    fn test_from_config_prefers_file() {
        let config = SourceConfig {
            file: Some("people.json".into()),
            ..SourceConfig::default()
        };
        let source = from_config(&config).unwrap();
        assert!(source.describe().contains("people.json"));
    }
}
