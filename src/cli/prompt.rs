//! Terminal prompts via dialoguer

use crate::cli::style::{Stylize, link};
use anstream::{eprintln, println};
use ado_npmrc::error::{Error, Result};
use ado_npmrc::resolve::{PromptSpec, Prompter, TokenHelp};
use dialoguer::Password;
use dialoguer::console::Term;

/// Prompts on the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn token_help(&self, help: &TokenHelp) {
        println!(
            "{}",
            "No personal access token supplied. Paste one below.".warn()
        );
        println!(
            "  Create a token for {} at: {}",
            help.organization.emphasis(),
            link(&help.url).accent()
        );
        println!("  {} {}", "Required scope:".muted(), help.scope.emphasis());
        println!();
    }

    fn ask(
        &self,
        spec: &PromptSpec<'_>,
        validate: &dyn Fn(&str) -> std::result::Result<(), String>,
    ) -> Result<String> {
        if !Term::stderr().is_term() {
            return Err(Error::Prompt(
                "no terminal to read a token from; pass --pat or set AZURE_DEVOPS_PAT".to_string(),
            ));
        }

        loop {
            let answer = Password::new()
                .with_prompt(spec.message)
                .allow_empty_password(true)
                .interact()
                .map_err(|e| Error::Prompt(e.to_string()))?;

            match validate(answer.as_str()) {
                Ok(()) => return Ok(answer),
                Err(msg) => eprintln!("{}", msg.warn()),
            }
        }
    }
}
