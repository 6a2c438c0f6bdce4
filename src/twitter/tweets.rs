//! Tweet operations for Twitter API.
//!
//! This module contains functions for creating and deleting tweets using the
//! Twitter API v2 with OAuth 1.0a User Context authentication.

use log::{debug, info, warn};
use reqwest::{Method, StatusCode};
use serde_json::json;

use crate::error::{Result, TweetError};

use super::api::TwitterClient;
use super::parsing::{extract_error_detail, extract_tweet_id};

/// Result of a delete request that reached the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The API answered 200 OK.
    Deleted,
    /// The API answered with any other status; nothing was deleted.
    Rejected { status: u16, detail: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

impl TwitterClient {
    /// Posts a tweet and returns the identifier assigned by the API.
    ///
    /// Sends `POST <api_base>/tweets` with the JSON body `{"text": text}`. The
    /// text is sent as-is; length limits are enforced by the API.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The `data.id` field of a 201 Created response
    /// - `Err(TweetError)`: On transport failure, any status other than 201,
    ///   or a body without `data.id`
    ///
    /// A non-201 body is still parsed, but only to pull out the API's error
    /// detail for the returned [`TweetError::Status`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tweetctl::{ClientConfig, Credentials, TwitterClient};
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() -> Result<(), tweetctl::TweetError> {
    ///     let client = TwitterClient::new(Credentials::from_env(), ClientConfig::from_env())?;
    ///     let id = client.create_tweet("Hello from Rust!").await?;
    ///     println!("Tweet posted with ID: {}", id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_tweet(&self, text: &str) -> Result<String> {
        info!("Starting tweet post operation ({} characters)", text.chars().count());

        let url = self.tweets_url()?;
        let payload = json!({ "text": text });

        let response = self
            .send_signed(Method::POST, url, Some(&payload), "create_tweet")
            .await?;

        if response.status != StatusCode::CREATED {
            warn!(
                "Tweet creation returned {} instead of 201 Created",
                response.status
            );
            return Err(TweetError::Status {
                operation: "create_tweet",
                status: response.status.as_u16(),
                detail: extract_error_detail(&response.body),
            });
        }

        let id = extract_tweet_id(&response.body)?;
        info!("Tweet posted with ID: {}", id);
        Ok(id)
    }

    /// Deletes a tweet by identifier.
    ///
    /// Sends `DELETE <api_base>/tweets/<id>`. The response body is not
    /// inspected on success.
    ///
    /// # Returns
    ///
    /// - `Ok(DeleteOutcome::Deleted)`: The API answered 200 OK
    /// - `Ok(DeleteOutcome::Rejected { .. })`: Any other status
    /// - `Err(TweetError)`: The request never produced a response
    pub async fn delete_tweet(&self, id: &str) -> Result<DeleteOutcome> {
        let id = id.trim();
        info!("Starting tweet delete operation for ID: {}", id);

        let url = self.tweet_url(id)?;
        let response = self
            .send_signed(Method::DELETE, url, None, "delete_tweet")
            .await?;

        if response.status == StatusCode::OK {
            info!("Tweet {} deleted", id);
            debug!("Delete response: {} bytes", response.body.len());
            Ok(DeleteOutcome::Deleted)
        } else {
            warn!("Failed to delete tweet {}: status {}", id, response.status);
            Ok(DeleteOutcome::Rejected {
                status: response.status.as_u16(),
                detail: extract_error_detail(&response.body),
            })
        }
    }
}
