use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, spotify::ApiError, types::Token};

/// Exchanges the stored refresh token for a fresh access token.
///
/// Performs a single POST against the configured token endpoint using the
/// `refresh_token` grant, authenticating with the client id and secret as
/// HTTP Basic credentials. There is no retry here: the token endpoint is
/// assumed reliable and a failure aborts the run.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh access token with scope and expiry metadata
/// - `Err(ApiError)` - Transport failure or a rejected exchange
///
/// # Token Lifecycle
///
/// The returned token is held in memory for the process lifetime. It is
/// never written to disk and never proactively renewed; a long-running
/// process that outlives the token's expiry will start seeing API errors
/// and should simply be restarted.
///
/// # Example
///
/// ```
/// let token = exchange_refresh_token().await?;
/// println!("token expires in {} seconds", token.expires_in);
/// ```
pub async fn exchange_refresh_token() -> Result<Token, ApiError> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", &config::spotify_refresh_token()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::TokenExchange(format!("{}: {}", status, body)));
    }

    let json: Value = res.json().await?;

    let access_token = json["access_token"].as_str().unwrap_or_default().to_string();
    if access_token.is_empty() {
        return Err(ApiError::TokenExchange(
            "response carried no access_token".to_string(),
        ));
    }

    Ok(Token {
        access_token,
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
