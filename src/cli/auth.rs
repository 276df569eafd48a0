//! Auth command - write feed credentials into the target .npmrc

use crate::cli::style::{Stylize, check};
use ado_npmrc::error::Result;
use ado_npmrc::resolve::{AuthOptions, Prompter, resolve_feeds, resolve_token};
use ado_npmrc::rewrite::write_credentials;
use anstream::println;

/// Resolve feeds and token, then update the target file
pub fn run_auth(options: &AuthOptions, prompter: &dyn Prompter) -> Result<()> {
    let feeds = resolve_feeds(options)?;
    let token = resolve_token(options, &feeds, prompter)?;

    write_credentials(&options.target, &feeds, &token)?;

    let noun = if feeds.len() == 1 { "feed" } else { "feeds" };
    println!(
        "{} {} {}",
        check(),
        format!("Authenticated {} {noun} in", feeds.len()).success(),
        options.target.display().accent()
    );
    for feed in &feeds {
        println!("  {}", feed.registry_key().muted());
    }

    Ok(())
}
