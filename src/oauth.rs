//! OAuth authentication module for Twitter/X API integration.
//!
//! Requests are signed with OAuth 1.0a (HMAC-SHA1) by `reqwest-oauth1`, which
//! wraps a `reqwest::Client` and adds the `Authorization` header to every
//! request it sends. This module maps the crate's credentials onto it.

use reqwest_oauth1::Secrets;

use crate::config::Credentials;

/// Builds the OAuth 1.0a secrets for a signed client.
///
/// The consumer pair identifies the application, the token pair identifies
/// the user on whose behalf tweets are posted and deleted.
pub(crate) fn secrets(credentials: &Credentials) -> Secrets<'_> {
    Secrets::new(
        credentials.consumer_key.as_str(),
        credentials.consumer_secret.as_str(),
    )
    .token(
        credentials.access_token.as_str(),
        credentials.access_token_secret.as_str(),
    )
}
