//! Reading feed URLs out of a project-level `.npmrc`
//!
//! The file uses npm's ini dialect: `;`/`#` comments, `[section]` headers and
//! `key = value` pairs. Only top-level keys (before the first section) are
//! considered, and of those only `registry` and `@scope:registry`.

use crate::error::{Error, Result};
use crate::feed::FeedUrl;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// `registry` or `@scope:registry`
static RE_REGISTRY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@[^:\s]+:)?registry$").unwrap());

/// A key/value pair from an npmrc file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmrcEntry {
    /// Section the entry appeared in, `None` for top-level keys
    pub section: Option<String>,
    /// Key with surrounding whitespace removed
    pub key: String,
    /// Value with surrounding whitespace, matching quotes and inline comments removed
    pub value: String,
}

/// Parse npmrc text into entries, in file order
pub fn parse_npmrc(content: &str) -> Vec<NpmrcEntry> {
    let mut section: Option<String> = None;
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            section = Some(name.trim().to_string());
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        entries.push(NpmrcEntry {
            section: section.clone(),
            key: clean_value(key.trim()),
            value: clean_value(value.trim()),
        });
    }

    entries
}

/// Unwrap a quoted value, or cut an unquoted one at its inline comment
///
/// Unquoted text ends at the first unescaped `;` or `#`; `\;`, `\#` and `\\`
/// stand for the literal character.
fn clean_value(s: &str) -> String {
    let quoted = ['"', '\'']
        .iter()
        .find_map(|&q| s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)));
    if let Some(inner) = quoted {
        return inner.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut escaped = false;
    for c in s.chars() {
        if escaped {
            if !matches!(c, ';' | '#' | '\\') {
                out.push('\\');
            }
            out.push(c);
            escaped = false;
        } else if matches!(c, ';' | '#') {
            break;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    if escaped {
        out.push('\\');
    }

    out.trim().to_string()
}

/// Whether `key` names a registry (`registry` or `@scope:registry`)
pub fn is_registry_key(key: &str) -> bool {
    RE_REGISTRY_KEY.is_match(key)
}

/// Collect Azure DevOps feeds from top-level registry entries
///
/// Registries that are not Azure DevOps feeds are skipped silently; projects
/// routinely point some scopes at the public registry. Duplicates are dropped,
/// keeping the first occurrence.
pub fn discover_feeds(content: &str) -> Vec<FeedUrl> {
    let mut feeds: Vec<FeedUrl> = Vec::new();

    for entry in parse_npmrc(content) {
        if entry.section.is_some() || !is_registry_key(&entry.key) {
            continue;
        }

        match FeedUrl::parse(&entry.value) {
            Some(feed) if feeds.contains(&feed) => {
                debug!(key = %entry.key, url = %feed, "duplicate feed, skipping");
            }
            Some(feed) => {
                debug!(key = %entry.key, url = %feed, "discovered feed");
                feeds.push(feed);
            }
            None => {
                debug!(key = %entry.key, url = %entry.value, "not an Azure DevOps feed, skipping");
            }
        }
    }

    feeds
}

/// Read a project `.npmrc` and return the feeds it references
///
/// Fails if the file is missing or references no Azure DevOps feed.
pub fn read_project_feeds(path: &Path) -> Result<Vec<FeedUrl>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::ProjectConfigNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(Error::ProjectConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let feeds = discover_feeds(&content);
    if feeds.is_empty() {
        return Err(Error::NoFeedsFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = feeds.len(), "read feeds from project config");
    Ok(feeds)
}

/// Expand a leading `~` to the user's home directory
///
/// Only `~` and `~/...` are expanded; if the home directory is unknown the
/// path is returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

fn expand_tilde_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
