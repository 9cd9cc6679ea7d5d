//! User directory capability
//!
//! [`UserDirectory`] abstracts the external service that stores users so
//! callers do not depend on a particular backend.
//!
//! - [`MockUserDirectory`]: synthesizes records locally, no I/O
//! - [`HttpUserDirectory`]: REST backend over `reqwest`

mod error;
mod http;
mod mock;
mod types;

pub use error::DirectoryError;
pub use http::HttpUserDirectory;
pub use mock::MockUserDirectory;
pub use types::{DirectoryConfig, User, DEFAULT_BASE_URL};

use std::sync::Arc;

use async_trait::async_trait;

use crate::validation::UserData;

/// Access to the external user store
///
/// `create_user` validates the data locally before any backend work; a
/// [`DirectoryError::Validation`] means nothing was sent.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user by ID, `None` if the backend has no such user
    async fn get_user(&self, user_id: u64) -> Result<Option<User>, DirectoryError>;

    /// Create a new user
    async fn create_user(&self, user_data: &UserData) -> Result<bool, DirectoryError>;
}

/// Shared UserDirectory handle
pub type SharedUserDirectory = Arc<dyn UserDirectory>;
