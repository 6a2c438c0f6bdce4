//! Interactive console menu.
//!
//! The loop prints the menu, reads one choice per iteration and dispatches to
//! the tweet operations. The only state carried between iterations is the
//! identifier of the last tweet posted in this session, held in [`Session`].

use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::error::TweetError;
use crate::twitter::{DeleteOutcome, TwitterClient};

const MENU_LINES: [&str; 5] = [
    "Choose an option:",
    "1. Post a new tweet",
    "2. Delete the previously created tweet",
    "3. Delete a tweet by providing an ID",
    "Type 'quit' to exit",
];

pub const NO_TWEET_MESSAGE: &str = "No tweet has been created yet. Please create a tweet first.";
pub const GOODBYE_MESSAGE: &str = "Exiting the program. Goodbye!";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again";

/// A menu selection, parsed from one trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Create,
    DeleteLast,
    DeleteById,
    Quit,
    Invalid,
}

impl Choice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Choice::Create,
            "2" => Choice::DeleteLast,
            "3" => Choice::DeleteById,
            "quit" => Choice::Quit,
            _ => Choice::Invalid,
        }
    }
}

/// Per-run state of the interactive session.
///
/// At most one identifier is remembered, and only until it is deleted
/// through the menu or the process exits.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    last_tweet_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn last_tweet_id(&self) -> Option<&str> {
        self.last_tweet_id.as_deref()
    }

    pub fn remember(&mut self, id: String) {
        debug!("Remembering tweet ID {}", id);
        self.last_tweet_id = Some(id);
    }

    pub fn forget(&mut self) -> Option<String> {
        self.last_tweet_id.take()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Reads one line and trims it. Returns `None` at end of input.
fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_trimmed_line(input)
}

fn print_menu(output: &mut impl Write) -> io::Result<()> {
    for line in MENU_LINES {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

fn report_error(output: &mut impl Write, action: &str, error: &TweetError) -> io::Result<()> {
    writeln!(output, "{}: {}", action, error)?;
    if error.is_auth_failure() {
        writeln!(
            output,
            "Check the API_KEY, API_SECRET_KEY, ACCESS_TOKEN and ACCESS_TOKEN_SECRET values."
        )?;
    }
    Ok(())
}

/// Deletes one tweet and prints the outcome. Returns `true` if it was deleted.
async fn delete_and_report(
    client: &TwitterClient,
    output: &mut impl Write,
    id: &str,
) -> io::Result<bool> {
    match client.delete_tweet(id).await {
        Ok(DeleteOutcome::Deleted) => {
            writeln!(output, "Tweet with ID {} has been deleted.", id)?;
            Ok(true)
        }
        Ok(DeleteOutcome::Rejected { status, detail }) => {
            writeln!(
                output,
                "Failed to delete tweet {}: status {} ({})",
                id, status, detail
            )?;
            Ok(false)
        }
        Err(e) => {
            report_error(output, &format!("Failed to delete tweet {}", id), &e)?;
            Ok(false)
        }
    }
}

async fn dispatch(
    choice: Choice,
    client: &TwitterClient,
    session: &mut Session,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Step> {
    debug!("Menu choice: {:?}", choice);
    match choice {
        Choice::Create => {
            let Some(content) = prompt(input, output, "Enter the content of your tweet: ")? else {
                return Ok(Step::Quit);
            };
            writeln!(output, "Posting a new tweet...")?;
            match client.create_tweet(&content).await {
                Ok(id) => {
                    writeln!(output, "Tweet posted with ID: {}", id)?;
                    session.remember(id);
                }
                Err(e) => report_error(output, "Failed to post tweet", &e)?,
            }
        }
        Choice::DeleteLast => match session.last_tweet_id().map(str::to_string) {
            None => writeln!(output, "{}", NO_TWEET_MESSAGE)?,
            Some(id) => {
                writeln!(output, "Deleting the previously created tweet...")?;
                if delete_and_report(client, output, &id).await? {
                    session.forget();
                }
            }
        },
        Choice::DeleteById => {
            let Some(id) = prompt(input, output, "Enter the tweet ID to delete: ")? else {
                return Ok(Step::Quit);
            };
            if id.is_empty() {
                writeln!(output, "No tweet ID entered.")?;
            } else {
                writeln!(output, "Deleting the tweet with the provided ID...")?;
                delete_and_report(client, output, &id).await?;
            }
        }
        Choice::Quit => return Ok(Step::Quit),
        Choice::Invalid => writeln!(output, "{}", INVALID_CHOICE_MESSAGE)?,
    }
    Ok(Step::Continue)
}

/// Runs the interactive menu until the user types `quit` or input ends.
///
/// API failures are printed and the loop continues; only console I/O errors
/// end the session with an error.
pub async fn run_menu<R: BufRead, W: Write>(
    client: &TwitterClient,
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    info!("Interactive session started");
    loop {
        print_menu(&mut output)?;
        let step = match prompt(&mut input, &mut output, "Enter your choice: ")? {
            Some(line) => {
                let choice = Choice::parse(&line);
                dispatch(choice, client, session, &mut input, &mut output).await?
            }
            None => {
                writeln!(output)?;
                Step::Quit
            }
        };

        if step == Step::Quit {
            writeln!(output, "{}", GOODBYE_MESSAGE)?;
            output.flush()?;
            info!("Interactive session ended");
            return Ok(());
        }
    }
}
