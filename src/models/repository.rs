use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub description: Option<String>,
    pub language: Option<String>,
    pub fork: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// Repository listings partitioned by visibility.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoryBuckets {
    pub private: Vec<Repository>,
    pub public: Vec<Repository>,
}

impl RepositoryBuckets {
    pub fn from_repositories(repositories: &[Repository]) -> Self {
        Self {
            private: find_private_repositories(repositories),
            public: find_public_repositories(repositories),
        }
    }
}

pub fn filter_by_type(repository: &Repository, kind: &str) -> Result<bool> {
    match kind {
        "public" => Ok(!repository.private),
        "private" => Ok(repository.private),
        other => Err(Error::InvalidArgument(format!(
            "unknown repository type '{}'",
            other
        ))),
    }
}

pub fn find_private_repositories(repositories: &[Repository]) -> Vec<Repository> {
    repositories
        .iter()
        .filter(|r| r.private)
        .cloned()
        .collect()
}

pub fn find_public_repositories(repositories: &[Repository]) -> Vec<Repository> {
    repositories
        .iter()
        .filter(|r| !r.private)
        .cloned()
        .collect()
}
