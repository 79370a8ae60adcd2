use std::{fmt, time::Duration};

use reqwest::{Client, Method, StatusCode, header::HeaderMap};
use serde_json::Value;
use tokio::time::sleep;

use crate::{config, info, spotify::auth, types::Page, warning};

/// Errors produced by the Spotify Web API client.
///
/// Transient conditions (429 rate limits, unexpected server statuses) are
/// retried internally and never surface here; what does surface is either
/// a transport failure, a fatal client error the API told us not to retry,
/// or an exhausted retry budget.
#[derive(Debug)]
pub enum ApiError {
    /// Network or protocol level failure from reqwest.
    Http(reqwest::Error),
    /// 400/403 from the API. Not retryable.
    Fatal { status: StatusCode, body: String },
    /// An unexpected status kept coming back until the retry budget ran out.
    RetriesExhausted { status: StatusCode, attempts: u32 },
    /// A response body did not match the expected shape.
    Decode(serde_json::Error),
    /// The refresh-token exchange failed. Fatal at process start.
    TokenExchange(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "http error: {}", e),
            ApiError::Fatal { status, body } => {
                write!(f, "fatal API error {}: {}", status, body)
            }
            ApiError::RetriesExhausted { status, attempts } => write!(
                f,
                "gave up after {} retries, last status {}",
                attempts, status
            ),
            ApiError::Decode(e) => write!(f, "unexpected response shape: {}", e),
            ApiError::TokenExchange(msg) => write!(f, "token exchange failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

/// Retry behavior for requests that come back with an unexpected status.
///
/// Rate-limit responses (429) are always honored by sleeping for the
/// server-provided `Retry-After` and do not consume the attempt budget;
/// the budget only bounds the fixed-delay retries for everything else,
/// so a persistently broken endpoint fails instead of looping forever.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub fixed_delay: Duration,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            fixed_delay: Duration::from_secs(5),
            max_attempts: 10,
        }
    }
}

impl RetryPolicy {
    pub fn from_env() -> Self {
        RetryPolicy {
            max_attempts: config::retry_max_attempts(),
            ..Default::default()
        }
    }
}

/// Authenticated Spotify Web API client.
///
/// Holds the bearer token for the process lifetime; the token is obtained
/// once via [`SpotifyClient::connect`] and never persisted or proactively
/// renewed. All requests share the same rate-limit and retry handling.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
    retry: RetryPolicy,
}

impl SpotifyClient {
    /// Builds a client against an explicit API base URL with a given token.
    ///
    /// Used directly by tests; production code goes through [`connect`],
    /// which performs the refresh-token exchange first.
    ///
    /// [`connect`]: SpotifyClient::connect
    pub fn new(api_url: String, token: String, retry: RetryPolicy) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url,
            token,
            retry,
        }
    }

    /// Exchanges the configured refresh token for an access token and
    /// returns a ready-to-use client.
    ///
    /// The exchange is a single POST with no retry; the token endpoint is
    /// assumed reliable and a failure here is fatal to the run.
    pub async fn connect() -> Result<Self, ApiError> {
        let token = auth::exchange_refresh_token().await?;
        Ok(Self::new(
            config::spotify_apiurl(),
            token.access_token,
            RetryPolicy::from_env(),
        ))
    }

    /// Base URL of the Web API this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Issues a GET and returns the parsed JSON body.
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, url, None).await
    }

    /// Issues a POST with a JSON body and returns the parsed response.
    pub async fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::POST, url, Some(body)).await
    }

    /// Issues a DELETE with a JSON body and returns the parsed response.
    pub async fn delete(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(Method::DELETE, url, Some(body)).await
    }

    /// Sends one logical request, absorbing rate limits and transient
    /// failures.
    ///
    /// The request is rebuilt and resent in a loop rather than by recursive
    /// self-calls, so retries cannot grow the call stack:
    ///
    /// - `429` - sleep for the `Retry-After` seconds the server asked for,
    ///   then resend the identical request. Unbounded, per API contract.
    /// - `200`/`201` - success, parse and return the body.
    /// - `204` - success with no body, returned as `Value::Null`.
    /// - `400`/`403` - fatal, returned as [`ApiError::Fatal`] without retry.
    /// - anything else - sleep the fixed delay and retry, up to the
    ///   policy's `max_attempts`.
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut attempts: u32 = 0;

        loop {
            let mut req = self
                .http
                .request(method.clone(), url)
                .bearer_auth(&self.token);
            if let Some(json) = body {
                req = req.json(json);
            }

            let response = req.send().await?;
            let status = response.status();

            match status {
                StatusCode::OK | StatusCode::CREATED => {
                    return response.json::<Value>().await.map_err(ApiError::Http);
                }
                StatusCode::NO_CONTENT => {
                    return Ok(Value::Null);
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let secs = retry_after_secs(response.headers());
                    info!("Rate limited, waiting {}s before resending", secs);
                    sleep(Duration::from_secs(secs)).await;
                    continue; // resend identical request
                }
                StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN => {
                    let body = response.text().await.unwrap_or_default();
                    return Err(ApiError::Fatal { status, body });
                }
                _ => {
                    attempts += 1;
                    if attempts >= self.retry.max_attempts {
                        return Err(ApiError::RetriesExhausted { status, attempts });
                    }
                    warning!(
                        "Unexpected status {}, retrying in {:?} ({}/{})",
                        status,
                        self.retry.fixed_delay,
                        attempts,
                        self.retry.max_attempts
                    );
                    sleep(self.retry.fixed_delay).await;
                }
            }
        }
    }

    /// Collects every item of a paging object, starting from its first page.
    ///
    /// Follows `next` until it is absent, appending each page's items in
    /// server-delivered order. Every follow-up fetch goes through the same
    /// rate-limit handling as any other request.
    pub async fn drain_pages(&self, first_page: Page) -> Result<Vec<Value>, ApiError> {
        let mut items = first_page.items;
        let mut next = first_page.next;

        while let Some(url) = next {
            let page: Page = serde_json::from_value(self.get(&url).await?)
                .map_err(ApiError::Decode)?;
            items.extend(page.items);
            next = page.next;
        }

        Ok(items)
    }

    /// Fetches a paginated endpoint and drains it to a flat item list.
    pub async fn get_all_items(&self, url: &str) -> Result<Vec<Value>, ApiError> {
        let first: Page = serde_json::from_value(self.get(url).await?).map_err(ApiError::Decode)?;
        self.drain_pages(first).await
    }
}

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}
