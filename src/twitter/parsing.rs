//! Response body parsing for the Twitter API v2.
//!
//! Only two things are ever read from a response: the identifier assigned to a
//! new tweet and, on failure, a human-readable error detail.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TweetError};

use super::api::sanitize_for_logging;

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: Option<CreatedTweet>,
}

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: Option<Value>,
}

/// Extracts `data.id` from a tweet creation response body.
///
/// The identifier is normally a string; a bare JSON number is accepted too and
/// converted to its decimal form.
///
/// # Errors
///
/// - [`TweetError::Parse`] if the body is not a JSON object
/// - [`TweetError::MissingField`] if `data.id` is absent, empty or not a scalar
pub(crate) fn extract_tweet_id(body: &str) -> Result<String> {
    let response: CreateTweetResponse = serde_json::from_str(body)?;

    match response.data.and_then(|d| d.id) {
        Some(Value::String(id)) if !id.is_empty() => Ok(id),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(TweetError::MissingField("data.id")),
    }
}

/// Pulls a readable error message out of an API error body.
///
/// Twitter v2 error responses carry `detail` and `title` at the top level, or
/// an `errors` array whose entries have `message`/`detail`. Anything else is
/// returned as a sanitized, truncated snippet of the raw body.
pub(crate) fn extract_error_detail(body: &str) -> String {
    let fallback = || {
        if body.trim().is_empty() {
            "empty response body".to_string()
        } else {
            sanitize_for_logging(body.trim(), 200)
        }
    };

    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => return fallback(),
    };

    let as_text = |v: Option<&Value>| v.and_then(|v| v.as_str()).map(str::to_string);

    as_text(json.get("detail"))
        .or_else(|| as_text(json.get("title")))
        .or_else(|| {
            json.get("errors")
                .and_then(|e| e.get(0))
                .and_then(|e| as_text(e.get("message")).or_else(|| as_text(e.get("detail"))))
        })
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tweet_id() {
        assert_eq!(
            extract_tweet_id(r#"{"data":{"id":"12345","text":"hello"}}"#).unwrap(),
            "12345"
        );
        assert_eq!(extract_tweet_id(r#"{"data":{"id":67890}}"#).unwrap(), "67890");
    }

    #[test]
    fn test_extract_tweet_id_missing_field() {
        for body in [
            r#"{}"#,
            r#"{"data":{}}"#,
            r#"{"data":{"id":""}}"#,
            r#"{"data":{"id":null}}"#,
            r#"{"data":null}"#,
        ] {
            assert!(
                matches!(extract_tweet_id(body), Err(TweetError::MissingField("data.id"))),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_extract_tweet_id_not_json() {
        assert!(matches!(
            extract_tweet_id("<html>oops</html>"),
            Err(TweetError::Parse(_))
        ));
        assert!(matches!(extract_tweet_id(""), Err(TweetError::Parse(_))));
    }

    #[test]
    fn test_extract_error_detail() {
        assert_eq!(
            extract_error_detail(r#"{"title":"Forbidden","detail":"You are not permitted to perform this action.","status":403}"#),
            "You are not permitted to perform this action."
        );
        assert_eq!(extract_error_detail(r#"{"title":"Unauthorized"}"#), "Unauthorized");
        assert_eq!(
            extract_error_detail(r#"{"errors":[{"message":"Could not authenticate you","code":32}]}"#),
            "Could not authenticate you"
        );
        assert_eq!(extract_error_detail("Bad gateway\n"), "Bad gateway");
        assert_eq!(extract_error_detail("  "), "empty response body");
        assert_eq!(extract_error_detail(r#"{"status":500}"#), r#"{"status":500}"#);
    }
}
