//! Core Twitter API utilities.
//!
//! This module contains the signed HTTP client used by every tweet operation.
//! The underlying `reqwest::Client` is built once and reused; each request is
//! sent through `reqwest-oauth1`, which signs it with OAuth 1.0a.

use log::{debug, info, warn};
use reqwest::{Client, Method, StatusCode};
use reqwest_oauth1::OAuthClientProvider;
use serde_json::Value;
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::{Result, TweetError};
use crate::oauth;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// Raw outcome of one signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client for the Twitter/X API that signs every request with the
/// configured user credentials.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    credentials: Credentials,
    config: ClientConfig,
}

impl TwitterClient {
    /// Builds a client from credentials and settings loaded at startup.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed (for example when the
    /// TLS backend fails to initialise) or if `api_base` is not a valid URL.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Url::parse(&config.api_base)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        info!(
            "Twitter client ready (base: {}, timeout: {}s)",
            config.api_base,
            config.timeout.as_secs()
        );

        Ok(TwitterClient {
            http,
            credentials,
            config,
        })
    }

    /// Returns the tweet creation endpoint.
    pub(crate) fn tweets_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.config.tweets_url())?)
    }

    /// Returns `<tweets endpoint>/<id>` with the identifier encoded as a
    /// single path segment.
    ///
    /// Empty, `.` and `..` identifiers are rejected: `url` drops dot segments,
    /// which would point the request at the collection instead of one tweet.
    pub(crate) fn tweet_url(&self, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(TweetError::InvalidId(id.to_string()));
        }

        let mut url = self.tweets_url()?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(id);
        Ok(url)
    }

    /// Sends one signed request and returns the status and body text.
    ///
    /// No status code is treated as an error here; callers decide what counts
    /// as success. Only signing and transport failures (connection, timeout,
    /// body read) are returned as errors.
    ///
    /// # Parameters
    ///
    /// - `method`: HTTP method
    /// - `url`: Fully built endpoint URL
    /// - `payload`: Optional JSON body, sent with `Content-Type: application/json`
    /// - `operation_name`: Human-readable name for the operation (for logging)
    pub(crate) async fn send_signed(
        &self,
        method: Method,
        url: Url,
        payload: Option<&Value>,
        operation_name: &str,
    ) -> Result<ApiResponse> {
        info!(
            "Making signed {} request for operation: {}",
            method, operation_name
        );
        debug!("Request URL: {}", url);
        debug!("Request headers: Authorization: OAuth [REDACTED]");

        let mut request_builder = self
            .http
            .clone()
            .oauth1(oauth::secrets(&self.credentials))
            .request(method, url);

        // JSON bodies are not part of the OAuth 1.0a signature base string
        if let Some(payload) = payload {
            debug!("Request payload: {}", payload);
            request_builder = request_builder
                .header("Content-Type", "application/json")
                .body(payload.to_string());
        }

        let response = request_builder.send().await?;
        let status = response.status();
        info!(
            "Received response with status: {} for operation: {}",
            status, operation_name
        );

        let body = response.text().await?;
        if status.is_success() {
            debug!(
                "Response summary for '{}': {} bytes received",
                operation_name,
                body.len()
            );
        } else {
            warn!(
                "Operation '{}' returned {}: {}",
                operation_name,
                status,
                sanitize_for_logging(&body, 200)
            );
        }

        Ok(ApiResponse { status, body })
    }
}
