//! Twitter/X API integration module.
//!
//! This module contains the signed API client and the tweet operations built
//! on it, using OAuth 1.0a User Context authentication.

mod api;
mod parsing;
mod tweets;

// Re-export public API
pub use api::TwitterClient;
pub use tweets::DeleteOutcome;
