//! Azure DevOps feed URL matching
//!
//! Only two URL shapes are accepted, both on `pkgs.dev.azure.com`:
//!
//! ```text
//! https://pkgs.dev.azure.com/{organization}/_packaging/{feed}/npm/registry/
//! https://pkgs.dev.azure.com/{organization}/{project}/_packaging/{feed}/npm/registry/
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Regex for organization-scoped feeds: `https://pkgs.dev.azure.com/{org}/_packaging/{feed}/npm/registry/`
static RE_ORG_FEED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://pkgs\.dev\.azure\.com/(?P<organization>[^/?#]+)/_packaging/(?P<feed>[^/?#]+)/npm/registry/$",
    )
    .unwrap()
});

/// Regex for project-scoped feeds: `https://pkgs.dev.azure.com/{org}/{project}/_packaging/{feed}/npm/registry/`
static RE_PROJECT_FEED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://pkgs\.dev\.azure\.com/(?P<organization>[^/?#]+)/(?P<project>[^/?#]+)/_packaging/(?P<feed>[^/?#]+)/npm/registry/$",
    )
    .unwrap()
});

/// Which template a feed URL matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Feed owned by the organization
    Organization,
    /// Feed owned by a project inside the organization
    Project,
}

/// A validated Azure DevOps npm feed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrl {
    raw: String,
    kind: FeedKind,
    organization: String,
    project: Option<String>,
    feed: String,
    hostname: String,
    pathname: String,
}

impl FeedUrl {
    /// Match `url` against both feed templates
    ///
    /// Returns `None` when the string conforms to neither.
    pub fn parse(url: &str) -> Option<Self> {
        let (caps, kind) = RE_PROJECT_FEED
            .captures(url)
            .map(|c| (c, FeedKind::Project))
            .or_else(|| RE_ORG_FEED.captures(url).map(|c| (c, FeedKind::Organization)))?;

        // Parsed like a browser would, so the key prefix uses the normalized pathname
        let parsed = url::Url::parse(url).ok()?;

        Some(Self {
            raw: url.to_string(),
            kind,
            organization: caps["organization"].to_string(),
            project: caps.name("project").map(|m| m.as_str().to_string()),
            feed: caps["feed"].to_string(),
            hostname: parsed.host_str()?.to_string(),
            pathname: parsed.path().to_string(),
        })
    }

    /// Like [`FeedUrl::parse`], but reports the offending input
    pub fn try_parse(url: &str) -> Result<Self> {
        Self::parse(url).ok_or_else(|| Error::InvalidFeedUrl {
            url: url.to_string(),
        })
    }

    /// The URL exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Which template matched
    pub const fn kind(&self) -> FeedKind {
        self.kind
    }

    /// Organization segment
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Project segment, for project-scoped feeds
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Feed name segment
    pub fn feed(&self) -> &str {
        &self.feed
    }

    /// Host, always `pkgs.dev.azure.com`
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Path including the trailing slash
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Host-scoped prefix npm uses for registry credentials: `//{hostname}{pathname}`
    pub fn registry_key(&self) -> String {
        format!("//{}{}", self.hostname, self.pathname)
    }

    /// Page where a personal access token for this organization can be created
    pub fn token_page(&self) -> String {
        format!(
            "https://dev.azure.com/{}/_usersSettings/tokens",
            self.organization
        )
    }
}

impl fmt::Display for FeedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Check whether `url` matches either feed template
pub fn is_feed_url(url: &str) -> bool {
    RE_PROJECT_FEED.is_match(url) || RE_ORG_FEED.is_match(url)
}
