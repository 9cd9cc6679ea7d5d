//! In-process user directory

use async_trait::async_trait;
use tracing::info;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::validation::{validate_new_user, UserData};

use super::{DirectoryError, User, UserDirectory};

/// Directory that synthesizes users from their ID
///
/// The API key and timeout are kept so the mock is constructed the same
/// way as a real client, but neither is used.
#[derive(Debug, Clone)]
pub struct MockUserDirectory {
    api_key: String,
    timeout_secs: u64,
}

impl MockUserDirectory {
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            api_key: api_key.into(),
            timeout_secs,
        }
    }

    /// Mock with the default timeout
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_TIMEOUT_SECS)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn get_user(&self, user_id: u64) -> Result<Option<User>, DirectoryError> {
        Ok(Some(User {
            id: user_id,
            name: format!("User {}", user_id),
            email: format!("user{}@example.com", user_id),
        }))
    }

    async fn create_user(&self, user_data: &UserData) -> Result<bool, DirectoryError> {
        validate_new_user(user_data)?;

        let email = user_data.get("email").and_then(|v| v.as_str()).unwrap_or_default();
        info!("Creating user: {}", email);
        Ok(true)
    }
}
