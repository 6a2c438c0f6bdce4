//! # tweetctl
//!
//! Interactive command-line tool that posts and deletes tweets through the
//! Twitter/X API v2 using OAuth 1.0a User Context authentication.
//!
//! ## Environment Variables
//!
//! - `API_KEY`, `API_SECRET_KEY`: consumer key and secret
//! - `ACCESS_TOKEN`, `ACCESS_TOKEN_SECRET`: user access token and secret
//! - `TWITTER_API_BASE`: API base URL override
//! - `TWEETCTL_TIMEOUT_SECS`: request timeout in seconds
//! - `RUST_LOG`: log level (defaults to `warn`)

use log::info;
use std::io;

use tweetctl::config::load_dotenv;
use tweetctl::{run_menu, ClientConfig, Credentials, Session, TwitterClient};

/// Main entry point for tweetctl.
///
/// Loads `.env` and the credentials once, builds the signed client and hands
/// control to the interactive menu until the user quits.
///
/// # Example Usage
///
/// ```bash
/// # Run with credentials from .env
/// cargo run
///
/// # Run with debug logging
/// RUST_LOG=debug cargo run
/// ```
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    load_dotenv();
    let credentials = Credentials::from_env();
    let config = ClientConfig::from_env();
    let client = TwitterClient::new(credentials, config)?;

    info!("Starting tweetctl interactive session");

    let mut session = Session::new();
    let stdin = io::stdin();
    run_menu(&client, &mut session, stdin.lock(), io::stdout()).await?;

    Ok(())
}
