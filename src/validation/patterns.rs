//! Email pattern definitions

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Both patterns tolerate a single trailing `\n` after the address, so a
// value read line by line validates the same as its trimmed form.

/// `local@domain.tld` with a 2+ letter alphabetic TLD
const STANDARD_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\n?\z";

/// Word characters plus `.-` on both sides, any single-level TLD
const RELAXED_EMAIL_PATTERN: &str = r"^[\w\.-]+@[\w\.-]+\.\w+\n?\z";

static STANDARD_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(STANDARD_EMAIL_PATTERN).expect("standard email pattern is valid"));

static RELAXED_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(RELAXED_EMAIL_PATTERN).expect("relaxed email pattern is valid"));

/// Which email pattern to check against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmailRule {
    /// Canonical pattern used for user-record statistics
    #[default]
    Standard,
    /// Pattern used when creating a user
    Relaxed,
}

impl EmailRule {
    /// Raw regex source of this rule
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Standard => STANDARD_EMAIL_PATTERN,
            Self::Relaxed => RELAXED_EMAIL_PATTERN,
        }
    }

    /// Returns true if `email` matches this rule
    pub fn matches(&self, email: &str) -> bool {
        match self {
            Self::Standard => STANDARD_EMAIL_REGEX.is_match(email),
            Self::Relaxed => RELAXED_EMAIL_REGEX.is_match(email),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for EmailRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validate email address format using the standard rule
pub fn is_valid_email(email: &str) -> bool {
    EmailRule::Standard.matches(email)
}
