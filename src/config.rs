use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let client_id = env::var("GITHUB_CLIENT_ID")
            .map_err(|_| Error::Config("GITHUB_CLIENT_ID environment variable not set".to_string()))?;

        let client_secret = env::var("GITHUB_CLIENT_SECRET").map_err(|_| {
            Error::Config("GITHUB_CLIENT_SECRET environment variable not set".to_string())
        })?;

        let token = env::var("GITHUB_TOKEN").ok();

        Ok(Self {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            token,
        })
    }
}
