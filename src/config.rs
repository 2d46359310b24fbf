//! Configuration management for spotcli.
//!
//! Values come from environment variables, optionally seeded from `.env` files:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/spotcli/.env`)
//! 4. Application defaults (endpoints only)
//!
//! Client credentials may also come from a `client-secrets.json` file.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    types::ClientSecrets,
};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SECRETS_FILE: &str = "client-secrets.json";

/// Loads `.env` files into the process environment.
///
/// Missing files are fine; variables already set are never overwritten.
pub async fn load_env() -> Result<()> {
    if dotenv::dotenv().is_ok() {
        log::debug!("Loaded .env from working directory");
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if dotenv::from_path(&path).is_ok() {
        log::debug!("Loaded {}", path.display());
    }
    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcli/.env");
    path
}

pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

pub fn secrets_file() -> PathBuf {
    env::var("SPOTCLI_SECRETS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_FILE))
}

/// Application credentials for the client-credentials grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let credentials = Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        };

        if credentials.client_id.trim().is_empty() {
            return Err(Error::Credentials("client id is empty".to_string()));
        }
        if credentials.client_secret.trim().is_empty() {
            return Err(Error::Credentials("client secret is empty".to_string()));
        }
        Ok(credentials)
    }

    /// `CLIENT_ID`/`CLIENT_SECRET` first, then the secrets file.
    pub async fn load() -> Result<Self> {
        if let Some(credentials) = Self::from_env()? {
            log::debug!("Using credentials from environment");
            return Ok(credentials);
        }

        let path = secrets_file();
        log::debug!("Reading credentials from {}", path.display());
        Self::from_file(&path).await
    }

    /// Returns `None` when neither variable is set.
    pub fn from_env() -> Result<Option<Self>> {
        let id = env::var("CLIENT_ID").ok();
        let secret = env::var("CLIENT_SECRET").ok();

        match (id, secret) {
            (None, None) => Ok(None),
            (Some(id), Some(secret)) => Self::new(id, secret).map(Some),
            (Some(_), None) => Err(Error::Credentials(
                "CLIENT_ID is set but CLIENT_SECRET is missing".to_string(),
            )),
            (None, Some(_)) => Err(Error::Credentials(
                "CLIENT_SECRET is set but CLIENT_ID is missing".to_string(),
            )),
        }
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = async_fs::read_to_string(path).await.map_err(|e| {
            Error::Credentials(format!(
                "Failed to open secrets file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let secrets: ClientSecrets = serde_json::from_str(content)
            .map_err(|e| Error::Credentials(format!("Failed to parse secrets: {}", e)))?;
        Self::new(secrets.client_id, secrets.client_secret)
    }
}
