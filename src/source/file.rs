use async_trait::async_trait;
use std::path::PathBuf;

use super::{DataSource, Person, parse_people};
use crate::error::{Result, SourceError};

/// Candidates read from a local JSON file holding the same array the
/// endpoint returns
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Person>> {
        if !self.path.exists() {
            return Err(SourceError::FileNotFound(self.path.display().to_string()).into());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let people = parse_people(&content).map_err(SourceError::from)?;
        Ok(people)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
