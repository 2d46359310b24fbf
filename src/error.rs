//! Error types shared by the request pipeline, the Spotify client and the
//! configuration loader.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to build request header: {0}")]
    Header(String),

    #[error("Failed to execute request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Spotify API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to get access token: {0}")]
    Token(#[source] Box<Error>),

    #[error("Failed to get access token: response did not contain an access token")]
    MissingToken,

    #[error("Empty {0} given")]
    EmptyQuery(&'static str),

    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("No {kind} found matching '{query}'")]
    NotFound { kind: &'static str, query: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        Error::Header(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error::Header(err.to_string())
    }
}
