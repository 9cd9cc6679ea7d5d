//! Pre-creation validation of user data

use serde_json::{Map, Value};

use super::error::ValidationError;
use super::patterns::EmailRule;

/// Raw user data as supplied to a create call
pub type UserData = Map<String, Value>;

/// Fields that must be present, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "password"];

/// Checks that `data` carries every required field and a well-formed email
///
/// # Arguments
/// * `data` - User data to validate
///
/// # Returns
/// `Ok(())` when the data may be used to create a user, otherwise the first
/// problem found. Missing fields are reported before email format.
pub fn validate_new_user(data: &UserData) -> Result<(), ValidationError> {
    if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !data.contains_key(**f)) {
        return Err(ValidationError::missing_field(*field));
    }

    // A non-string email can never match
    let email = data.get("email").and_then(Value::as_str).unwrap_or_default();
    if !EmailRule::Relaxed.matches(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
