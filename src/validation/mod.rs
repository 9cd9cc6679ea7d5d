//! Validation module
//!
//! Email syntax checks and the required-field check performed before a
//! user record is created.
//!
//! Two email patterns are kept side by side:
//!
//! - **Standard**: the canonical check used for user-record statistics
//! - **Relaxed**: the word-character pattern used by user creation

mod error;
mod patterns;
mod record;

pub use error::ValidationError;
pub use patterns::{is_valid_email, EmailRule};
pub use record::{validate_new_user, UserData, REQUIRED_FIELDS};

#[cfg(test)]
mod tests;
