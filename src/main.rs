//! ado-npmrc - npm authentication for Azure DevOps Artifacts
//!
//! CLI binary that writes feed credentials into a user-level `.npmrc`.

use anyhow::Result;
use ado_npmrc::npmrc::expand_tilde;
use ado_npmrc::resolve::AuthOptions;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "ado-npmrc")]
#[command(about = "Authenticate npm against Azure DevOps Artifacts feeds")]
#[command(version)]
struct Cli {
    /// Personal access token (prompted for when omitted)
    #[arg(long, env = "AZURE_DEVOPS_PAT", hide_env_values = true)]
    pat: Option<String>,

    /// Feed URLs to authenticate (defaults to the feeds listed in --npmrc)
    #[arg(long, num_args = 1..)]
    url: Vec<String>,

    /// Project .npmrc scanned for feed URLs when --url is not given
    #[arg(long, default_value = "./.npmrc")]
    npmrc: PathBuf,

    /// .npmrc that receives the credentials
    #[arg(long, default_value = "~/.npmrc")]
    target: PathBuf,

    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> AuthOptions {
        AuthOptions {
            pat: self.pat,
            urls: self.url,
            npmrc: expand_tilde(&self.npmrc),
            target: expand_tilde(&self.target),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.into_options();
    cli::run_auth(&options, &cli::TerminalPrompter)?;

    Ok(())
}
