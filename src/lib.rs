//! # tweetctl Library
//!
//! An interactive command-line client that posts and deletes tweets via the
//! Twitter/X API v2. Every request is signed with OAuth 1.0a (HMAC-SHA1) using
//! the caller's consumer key and access token.
//!
//! ## Features
//!
//! - Post a tweet and remember its identifier for the current session
//! - Delete the last posted tweet, or any tweet by identifier
//! - OAuth 1.0a request signing via `reqwest-oauth1`
//! - Typed, recoverable errors for transport, status and parse failures
//! - Structured logging
//!
//! ## Configuration
//!
//! The following environment variables are read once at startup (a `.env`
//! file in the working directory is honoured):
//! - `API_KEY`, `API_SECRET_KEY`: consumer key and secret
//! - `ACCESS_TOKEN`, `ACCESS_TOKEN_SECRET`: user access token and secret
//! - `TWITTER_API_BASE`: API base URL (defaults to `https://api.twitter.com/2`)
//! - `TWEETCTL_TIMEOUT_SECS`: request timeout in seconds (defaults to 30)
//!
//! ## API Endpoints Used
//!
//! - `POST /2/tweets`: creates a tweet, expects `201 Created`
//! - `DELETE /2/tweets/{id}`: deletes a tweet, expects `200 OK`

pub mod config;
pub mod error;
pub mod menu;
mod oauth;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{ClientConfig, Credentials};
pub use error::{Result, TweetError};
pub use menu::{run_menu, Choice, Session};
pub use twitter::{DeleteOutcome, TwitterClient};
