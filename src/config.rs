//! Configuration module for tweetctl.
//!
//! This module contains the credential and client configuration structures and
//! the environment variable handling for the Twitter/X API integration. Both are
//! loaded once at startup and passed explicitly into the API client.

use log::{debug, info, warn};
use std::env;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the OAuth 1.0a consumer key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the OAuth 1.0a consumer secret.
pub const API_SECRET_KEY_VAR: &str = "API_SECRET_KEY";
/// Environment variable holding the user access token.
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";
/// Environment variable holding the user access token secret.
pub const ACCESS_TOKEN_SECRET_VAR: &str = "ACCESS_TOKEN_SECRET";
/// Environment variable overriding the API base URL.
pub const API_BASE_VAR: &str = "TWITTER_API_BASE";
/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "TWEETCTL_TIMEOUT_SECS";

/// Default base URL for the Twitter API v2.
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com/2";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Loads variables from a `.env` file in the working directory, if there is one.
///
/// A missing or unreadable file is not an error: the process environment alone
/// is a valid credential source.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

/// Returns a log-safe preview of a secret value.
///
/// Long values keep their first and last four characters, short ones only a
/// prefix, and empty values are shown as `<empty>`.
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len == 0 {
        return "<empty>".to_string();
    }

    let prefix: String = secret.chars().take(4.min(len / 2)).collect();
    if len > 16 {
        let suffix: String = secret.chars().skip(len - 4).collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}

/// OAuth 1.0a credentials for the Twitter/X API.
///
/// The consumer pair identifies the application, the access token pair
/// identifies the user on whose behalf tweets are posted and deleted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The API key (OAuth consumer key)
    pub consumer_key: String,
    /// The API secret key (OAuth consumer secret)
    pub consumer_secret: String,
    /// The user Access Token
    pub access_token: String,
    /// The user Access Token Secret
    pub access_token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Loads the four credentials from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `API_KEY`: consumer key
    /// - `API_SECRET_KEY`: consumer secret
    /// - `ACCESS_TOKEN`: user access token
    /// - `ACCESS_TOKEN_SECRET`: user access token secret
    ///
    /// A missing variable becomes an empty string. Nothing is validated
    /// locally; the remote service rejects bad credentials with a 401 which
    /// surfaces as [`crate::TweetError::Status`].
    pub fn from_env() -> Self {
        let credentials = Credentials {
            consumer_key: read_credential(API_KEY_VAR),
            consumer_secret: read_credential(API_SECRET_KEY_VAR),
            access_token: read_credential(ACCESS_TOKEN_VAR),
            access_token_secret: read_credential(ACCESS_TOKEN_SECRET_VAR),
        };

        if credentials.is_complete() {
            info!("Twitter credentials loaded successfully");
        } else {
            warn!("Twitter credentials are incomplete - API requests will be rejected");
        }
        credentials
    }

    /// Returns `true` if all four values are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.consumer_key.is_empty()
            && !self.consumer_secret.is_empty()
            && !self.access_token.is_empty()
            && !self.access_token_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &mask_secret(&self.consumer_key))
            .field("consumer_secret", &mask_secret(&self.consumer_secret))
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_token_secret", &mask_secret(&self.access_token_secret))
            .finish()
    }
}

fn read_credential(name: &str) -> String {
    match env::var(name) {
        Ok(value) => {
            debug!("{} (masked): {}", name, mask_secret(&value));
            if value.is_empty() {
                warn!("{} is set but empty", name);
            }
            value
        }
        Err(_) => {
            warn!("{} environment variable is not set, using an empty value", name);
            String::new()
        }
    }
}

/// Settings for the HTTP client that talks to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub api_base: String,
    /// Timeout applied to every request
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns the default configuration pointed at a different API base.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        ClientConfig {
            api_base: api_base.trim_end_matches('/').to_string(),
            ..ClientConfig::default()
        }
    }

    /// Loads client settings from environment variables.
    ///
    /// - `TWITTER_API_BASE`: API base URL (defaults to `https://api.twitter.com/2`)
    /// - `TWEETCTL_TIMEOUT_SECS`: request timeout in seconds (defaults to 30)
    ///
    /// Unparsable or zero timeouts fall back to the default with a warning.
    pub fn from_env() -> Self {
        let mut config = match env::var(API_BASE_VAR) {
            Ok(base) if !base.trim().is_empty() => {
                info!("Using API base from {}: {}", API_BASE_VAR, base.trim());
                ClientConfig::with_api_base(base.trim())
            }
            _ => ClientConfig::default(),
        };

        if let Ok(raw) = env::var(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid {} value '{}', using {} seconds",
                    TIMEOUT_VAR, raw, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        debug!("Client configuration: {:?}", config);
        config
    }

    /// Returns the tweet creation endpoint, `<api_base>/tweets`.
    pub fn tweets_url(&self) -> String {
        format!("{}/tweets", self.api_base)
    }
}
