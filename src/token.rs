//! Personal access token validation
//!
//! Tokens are checked by shape only; nothing here talks to Azure DevOps.

use crate::error::{Error, Result};
use base64::Engine;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 52 or more letters and digits, any case
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]{52,}$").unwrap());

/// A personal access token that passed shape validation
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Validate `value` as-is (no trimming)
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_token(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::InvalidToken)
        }
    }

    /// Raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The token base64-encoded, as npm expects in `_password`
    pub fn encoded_password(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

// Keep the secret out of logs and panic messages
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Check whether `value` looks like an Azure DevOps personal access token
pub fn is_valid_token(value: &str) -> bool {
    RE_TOKEN.is_match(value)
}
