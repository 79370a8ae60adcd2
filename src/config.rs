//! Configuration management for the Spotify Library Archiver.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, the control server secret,
//! archive storage settings, and retry behavior.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotivault/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotivault/.env`
/// - macOS: `~/Library/Application Support/spotivault/.env`
/// - Windows: `%LOCALAPPDATA%/spotivault/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use spotivault::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotivault/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the bind address for the control server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the HTTP server should bind for handling
/// the `/move`, `/add` and `/del` control routes.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform. Used together with the client ID as HTTP
/// Basic credentials on the token endpoint.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let client_secret = spotify_client_secret(); // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the long-lived refresh token for the archived account.
///
/// Retrieves the `SPOTIFY_API_REFRESH_TOKEN` environment variable. The
/// refresh token is exchanged for a fresh access token once at process
/// start; the access token itself is never persisted.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REFRESH_TOKEN` environment variable is not set.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_API_REFRESH_TOKEN").expect("SPOTIFY_API_REFRESH_TOKEN must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for the refresh-token grant. This is hit exactly once per process,
/// at startup.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the pre-shared key protecting the control routes.
///
/// Retrieves the `CONTROL_API_KEY` environment variable. Every request to
/// `/move`, `/add` and `/del` must carry this value in its JSON body as
/// `api_key`; requests that don't are rejected with a 403.
///
/// # Panics
///
/// Panics if the `CONTROL_API_KEY` environment variable is not set.
pub fn control_api_key() -> String {
    env::var("CONTROL_API_KEY").expect("CONTROL_API_KEY must be set")
}

/// Returns the deployment stage used to derive the archive bucket name.
///
/// Retrieves the `STAGE` environment variable, defaulting to `dev` when it
/// is not set. Snapshots land in the bucket `spotivault-<stage>`.
///
/// # Example
///
/// ```
/// let stage = stage(); // e.g., "prod"
/// ```
pub fn stage() -> String {
    env::var("STAGE").unwrap_or_else(|_| "dev".to_string())
}

/// Returns the maximum number of fixed-delay retries for unexpected statuses.
///
/// Retrieves the `SPOTIFY_API_MAX_RETRIES` environment variable, defaulting
/// to 10. Rate-limit (429) waits are not counted against this budget; only
/// unexpected statuses (5xx and friends) consume it.
pub fn retry_max_attempts() -> u32 {
    env::var("SPOTIFY_API_MAX_RETRIES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}
