use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::{DataSource, Person};
use crate::config::SourceConfig;
use crate::error::{PeopleSearchError, Result, SourceError};

/// Delay between retry attempts
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Candidates fetched with a single GET from a REST endpoint
pub struct HttpSource {
    url: String,
    retry_attempts: u32,
    http_client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for `url` with the configured timeout and retries
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        Ok(Self {
            url: config.url.clone(),
            retry_attempts: config.retry_attempts,
            http_client,
        })
    }

    async fn fetch_once(&self) -> std::result::Result<Vec<Person>, SourceError> {
        let response = self.http_client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let people = super::parse_people(&body)?;
        Ok(people)
    }
}

/// Transient failures are worth another attempt; a bad payload or a client
/// error will not get better.
fn is_retryable(err: &SourceError) -> bool {
    match err {
        SourceError::RequestFailed(_) | SourceError::Timeout => true,
        SourceError::HttpStatus(code) => *code >= 500,
        SourceError::InvalidPayload(_) | SourceError::FileNotFound(_) => false,
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Person>> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(people) => return Ok(people),
                Err(e) if attempt < self.retry_attempts && is_retryable(&e) => {
                    attempt += 1;
                    debug!("GET {} failed ({}), retry {}", self.url, e, attempt);
                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
                Err(e) => return Err(PeopleSearchError::Source(e)),
            }
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
