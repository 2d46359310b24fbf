//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API that spotcli prints.
//!
//! ## Overview
//!
//! [`SpotifyClient`] authenticates with the client-credentials grant and issues
//! catalog requests through the shared [`Requestor`]. Every public operation
//! fetches a fresh token first; there is no token cache and no refresh.
//!
//! ```text
//! CLI Layer
//!     ↓
//! SpotifyClient (token fetch, search, catalog endpoints)
//!     ↓
//! Requestor (slugs, query, headers, JSON decode)
//!     ↓
//! Spotify Web API
//! ```
//!
//! Operations that take a name instead of an id (artist albums,
//! recommendations, album lookups) resolve the id with a one-item search
//! first, reusing the same token for both requests.
//!
//! ## Modules
//!
//! - [`auth`] - client-credentials token fetch
//! - [`artists`] - artist search, artist albums, recommendations
//! - [`albums`] - album search, album details, album tracks
//! - [`browse`] - categories, category playlists, new releases

pub mod albums;
pub mod artists;
pub mod auth;
pub mod browse;

use serde::de::DeserializeOwned;

use crate::{
    config::{self, Credentials},
    error::{Error, Result},
    request::{GetRequest, Requestor},
    types::Token,
};

pub struct SpotifyClient {
    credentials: Credentials,
    requestor: Requestor,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    /// Creates a client against the configured endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(
            credentials,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        )
    }

    /// Loads credentials from the environment or the secrets file.
    pub async fn from_env() -> Result<Self> {
        Ok(Self::new(Credentials::load().await?))
    }

    pub fn with_endpoints(
        credentials: Credentials,
        api_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        let api_url: String = api_url.into();
        SpotifyClient {
            credentials,
            requestor: Requestor::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url: token_url.into(),
        }
    }

    /// Replaces the request helper, e.g. to use a preconfigured HTTP client.
    pub fn with_requestor(mut self, requestor: Requestor) -> Self {
        self.requestor = requestor;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    fn require_query<'a>(kind: &'static str, value: &'a str) -> Result<&'a str> {
        match value.trim() {
            "" => Err(Error::EmptyQuery(kind)),
            trimmed => Ok(trimmed),
        }
    }

    async fn get_with_token<T: DeserializeOwned>(
        &self,
        token: &Token,
        path: &str,
        slugs: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        let authorization = token.authorization();

        self.requestor
            .get(GetRequest {
                url: &url,
                slugs,
                query,
                headers: &[("Authorization", authorization.as_str())],
            })
            .await
    }
}
