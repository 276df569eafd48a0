//! ado-npmrc - npm authentication for Azure DevOps Artifacts feeds
//!
//! Resolves feed URLs (from the command line or a project `.npmrc`), validates
//! a personal access token, and writes `username` / `_password` / `email`
//! entries for every feed into a user-level `.npmrc` without disturbing the
//! rest of the file.

pub mod error;
pub mod feed;
pub mod npmrc;
pub mod resolve;
pub mod rewrite;
pub mod token;
