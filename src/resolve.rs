//! Resolving the feed list and token for a run
//!
//! Everything comes in through [`AuthOptions`]; interactive input goes through
//! a [`Prompter`] so the resolver never touches the terminal itself.

use crate::error::{Error, Result};
use crate::feed::FeedUrl;
use crate::npmrc::read_project_feeds;
use crate::token::{Token, is_valid_token};
use std::path::PathBuf;
use tracing::debug;

/// Permission scope the token needs on Azure DevOps
pub const REQUIRED_SCOPE: &str = "Packaging (Read & write)";

/// Settings for a single run, built once from the command line
#[derive(Debug, Clone, Default)]
pub struct AuthOptions {
    /// Token supplied up front; `None` means prompt for it
    pub pat: Option<String>,
    /// Feed URLs supplied up front; empty means scan `npmrc`
    pub urls: Vec<String>,
    /// Project `.npmrc` scanned when `urls` is empty (already tilde-expanded)
    pub npmrc: PathBuf,
    /// File that receives the credentials (already tilde-expanded)
    pub target: PathBuf,
}

/// What to show the user before asking for a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenHelp {
    /// Organization the first feed belongs to
    pub organization: String,
    /// Page where a token can be created
    pub url: String,
    /// Permission scope to select
    pub scope: &'static str,
}

impl TokenHelp {
    /// Help for the organization owning `feed`
    pub fn for_feed(feed: &FeedUrl) -> Self {
        Self {
            organization: feed.organization().to_string(),
            url: feed.token_page(),
            scope: REQUIRED_SCOPE,
        }
    }
}

/// A single-line question to ask the user
///
/// Answers are secrets, so input is always hidden as it is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec<'a> {
    /// Prompt text
    pub message: &'a str,
}

/// Interactive input capability
///
/// Implementations block until the user submits input that `validate`
/// accepts, re-asking in place otherwise. Only one prompt is outstanding at a
/// time.
pub trait Prompter {
    /// Called once before the token prompt
    fn token_help(&self, help: &TokenHelp);

    /// Ask a question, returning the first answer `validate` accepts
    fn ask(
        &self,
        spec: &PromptSpec<'_>,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String>;
}

/// Resolve the feeds to configure
///
/// Explicit URLs win and must all be valid. Otherwise the project `.npmrc` is
/// scanned.
pub fn resolve_feeds(options: &AuthOptions) -> Result<Vec<FeedUrl>> {
    if options.urls.is_empty() {
        debug!(path = %options.npmrc.display(), "no --url given, scanning project config");
        return read_project_feeds(&options.npmrc);
    }

    options
        .urls
        .iter()
        .map(|url| {
            let feed = FeedUrl::try_parse(url)?;
            debug!(url = %feed, "accepted feed from command line");
            Ok(feed)
        })
        .collect()
}

/// Check a prompt answer, returning the message to show on rejection
pub fn validate_token_input(input: &str) -> std::result::Result<(), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("A personal access token is required".to_string());
    }
    if !is_valid_token(input) {
        return Err(Error::InvalidToken.to_string());
    }
    Ok(())
}

/// Resolve the token for `feeds`
///
/// A supplied token is validated immediately with no fallback to prompting.
/// Otherwise `prompter` is shown help for the first feed's organization and
/// asked until a valid token is entered.
pub fn resolve_token(
    options: &AuthOptions,
    feeds: &[FeedUrl],
    prompter: &dyn Prompter,
) -> Result<Token> {
    if let Some(pat) = &options.pat {
        debug!("using token supplied on the command line");
        return Token::parse(pat);
    }

    let first = feeds.first().ok_or_else(|| Error::NoFeedsFound(options.npmrc.clone()))?;
    prompter.token_help(&TokenHelp::for_feed(first));

    let spec = PromptSpec {
        message: "Personal access token",
    };
    let answer = prompter.ask(&spec, &validate_token_input)?;

    debug!("using token entered at the prompt");
    Token::parse(answer.trim())
}
