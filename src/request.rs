//! Single-shot HTTP helpers used by the Spotify client.
//!
//! A request goes through the same steps every time: the URL template gets its
//! `{slug}` placeholders replaced, query parameters are appended, headers are
//! injected, the request is sent once and the body is decoded from JSON. Any
//! failing step aborts the request with its own [`Error`] variant.

use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::{Error, Result},
    types::ErrorPayload,
};

/// Input for [`Requestor::get`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GetRequest<'a> {
    pub url: &'a str,
    pub slugs: &'a [(&'a str, &'a str)],
    pub query: &'a [(&'a str, &'a str)],
    pub headers: &'a [(&'a str, &'a str)],
}

/// Input for [`Requestor::post_form`]. The body is sent url-encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostRequest<'a> {
    pub url: &'a str,
    pub slugs: &'a [(&'a str, &'a str)],
    pub headers: &'a [(&'a str, &'a str)],
    pub form: &'a [(&'a str, &'a str)],
}

#[derive(Debug, Clone, Default)]
pub struct Requestor {
    client: Client,
}

impl Requestor {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Requestor { client }
    }

    /// Sends one GET request and decodes the JSON response into `T`.
    ///
    /// Non-success statuses are turned into [`Error::Api`] using the error
    /// payload Spotify sends back, so callers never try to decode an error
    /// object as a result.
    pub async fn get<T: DeserializeOwned>(&self, input: GetRequest<'_>) -> Result<T> {
        let url = substitute_slugs(input.url, input.slugs);
        let url = append_query(&url, input.query)?;
        let headers = build_headers(input.headers)?;

        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(Error::Transport)?;

        decode_response(response).await
    }

    /// Sends one url-encoded POST request and decodes the JSON response into `T`.
    pub async fn post_form<T: DeserializeOwned>(&self, input: PostRequest<'_>) -> Result<T> {
        let url = Url::parse(&substitute_slugs(input.url, input.slugs))?;
        let headers = build_headers(input.headers)?;

        log::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .headers(headers)
            .form(input.form)
            .send()
            .await
            .map_err(Error::Transport)?;

        decode_response(response).await
    }
}

/// Replaces every occurrence of each placeholder with its value.
///
/// Placeholders without a matching slug stay in the URL as they are.
pub fn substitute_slugs(template: &str, slugs: &[(&str, &str)]) -> String {
    slugs
        .iter()
        .fold(template.to_string(), |url, (placeholder, value)| {
            url.replace(placeholder, value)
        })
}

/// Parses `raw` and appends the given pairs after any query it already has.
pub fn append_query(raw: &str, params: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}

pub fn build_headers(headers: &[(&str, &str)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        map.append(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    Ok(map)
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await.map_err(Error::Body)?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Builds an [`Error::Api`] from an error response body.
///
/// Both the Web API shape (`{"error": {"status", "message"}}`) and the accounts
/// service shape (`{"error", "error_description"}`) are understood; anything
/// else is reported as the raw body text.
pub fn api_error(status: u16, body: &[u8]) -> Error {
    let message = match serde_json::from_slice::<ErrorPayload>(body) {
        Ok(payload) => payload.message(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    };

    let message = if message.is_empty() {
        "empty response body".to_string()
    } else {
        message
    };

    Error::Api { status, message }
}
