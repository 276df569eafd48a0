//! Writing feed credentials into a user-level `.npmrc`
//!
//! The target file is edited as plain lines rather than parsed, so comments,
//! blank lines and unrelated settings survive untouched. For every feed three
//! keys are guaranteed to exist afterwards:
//!
//! ```text
//! //pkgs.dev.azure.com/{path}:username=VssSessionToken
//! //pkgs.dev.azure.com/{path}:_password={base64 token}
//! //pkgs.dev.azure.com/{path}:email=not-used@example.com
//! ```

use crate::error::Result;
use crate::feed::FeedUrl;
use crate::token::Token;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Username Azure Artifacts expects alongside a PAT
pub const SESSION_USERNAME: &str = "VssSessionToken";

/// npm requires an email but Azure Artifacts ignores it
pub const PLACEHOLDER_EMAIL: &str = "not-used@example.com";

/// One `key=value` line to insert or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    /// Full key, e.g. `//pkgs.dev.azure.com/org/_packaging/feed/npm/registry/:username`
    pub key: String,
    /// Value written after `=`
    pub value: String,
}

impl CredentialEntry {
    /// The three entries for `feed`, in write order
    pub fn for_feed(feed: &FeedUrl, password: &str) -> [Self; 3] {
        let prefix = feed.registry_key();
        [
            Self {
                key: format!("{prefix}:username"),
                value: SESSION_USERNAME.to_string(),
            },
            Self {
                key: format!("{prefix}:_password"),
                value: password.to_string(),
            },
            Self {
                key: format!("{prefix}:email"),
                value: PLACEHOLDER_EMAIL.to_string(),
            },
        ]
    }

    /// Rendered `key=value` line
    pub fn line(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

/// Replace every line starting with `entry.key`, or append one if none does
fn upsert(lines: &mut Vec<String>, entry: &CredentialEntry) {
    let line = entry.line();
    let mut replaced = 0usize;

    for existing in lines.iter_mut() {
        if existing.trim().starts_with(&entry.key) {
            existing.clone_from(&line);
            replaced += 1;
        }
    }

    if replaced == 0 {
        debug!(key = %entry.key, "appending entry");
        lines.push(line);
    } else {
        debug!(key = %entry.key, count = replaced, "replaced existing entry");
    }
}

/// Apply credentials for `feeds` to npmrc `content`, returning the new text
///
/// Feeds are processed in order and each one's entries see lines appended for
/// earlier feeds. Lines that do not start with a generated key are kept as-is.
/// A file that already holds several lines for one key keeps all of them, each
/// overwritten with the new value.
pub fn rewrite_credentials(content: &str, feeds: &[FeedUrl], token: &Token) -> String {
    let password = token.encoded_password();

    let body = content.strip_suffix('\n').unwrap_or(content);
    let mut lines: Vec<String> = if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').map(str::to_string).collect()
    };

    for feed in feeds {
        for entry in CredentialEntry::for_feed(feed, &password) {
            upsert(&mut lines, &entry);
        }
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Read `target`, apply credentials for `feeds`, and write the result back
///
/// The file and any missing parent directories are created first. The whole
/// file is rewritten in one write.
pub fn write_credentials(target: &Path, feeds: &[FeedUrl], token: &Token) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let content = match fs::read_to_string(target) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %target.display(), "target does not exist, creating");
            String::new()
        }
        Err(e) => return Err(e.into()),
    };

    let updated = rewrite_credentials(&content, feeds, token);
    fs::write(target, updated)?;

    info!(path = %target.display(), feeds = feeds.len(), "wrote credentials");
    Ok(())
}
