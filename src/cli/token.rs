use crate::{error, info, success};

use super::{client, spinner};

/// Fetches a token to verify the configured credentials. The token value
/// itself is never printed.
pub async fn token() {
    let client = client().await;

    let pb = spinner("Requesting access token...");
    let result = client.fetch_token().await;
    pb.finish_and_clear();

    let token = match result {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    success!("Credentials are valid.");
    info!("Token type: {}", token.token_type);
    if !token.scope.is_empty() {
        info!("Scope: {}", token.scope);
    }
    match token.expires_at() {
        Some(at) => info!("Expires at: {} (in {}s)", at.to_rfc3339(), token.expires_in),
        None => info!("Expires in: {}s", token.expires_in),
    }
}
