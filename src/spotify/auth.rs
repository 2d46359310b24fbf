use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;

use crate::{
    error::{Error, Result},
    request::PostRequest,
    types::Token,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Exchanges the application credentials for an access token.
    ///
    /// Performs exactly one client-credentials POST against the token
    /// endpoint. The request fails when the call fails, when the body is not
    /// JSON, or when the body carries no access token.
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::from_env().await?;
    /// let token = client.fetch_token().await?;
    /// println!("{} expires in {}s", token.token_type, token.expires_in);
    /// ```
    pub async fn fetch_token(&self) -> Result<Token> {
        let authorization = format!("Basic {}", self.basic_credentials());

        let mut token: Token = self
            .requestor
            .post_form(PostRequest {
                url: &self.token_url,
                headers: &[
                    ("Authorization", authorization.as_str()),
                    ("Content-Type", "application/x-www-form-urlencoded"),
                ],
                form: &[("grant_type", "client_credentials")],
                ..Default::default()
            })
            .await
            .map_err(|e| Error::Token(Box::new(e)))?;

        if token.access_token.is_empty() {
            return Err(Error::MissingToken);
        }

        token.obtained_at = Utc::now().timestamp();
        log::debug!(
            "Obtained {} token valid for {}s",
            token.token_type,
            token.expires_in
        );
        Ok(token)
    }

    fn basic_credentials(&self) -> String {
        STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ))
    }
}
