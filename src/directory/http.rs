//! REST-backed user directory

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::validation::{validate_new_user, UserData};

use super::{DirectoryConfig, DirectoryError, User, UserDirectory};

/// Directory backed by a remote REST service
///
/// - `GET {base_url}/users/{id}`
/// - `POST {base_url}/users`
pub struct HttpUserDirectory {
    config: DirectoryConfig,
    http_client: reqwest::Client,
}

impl HttpUserDirectory {
    /// Builds a client honouring the configured timeout
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Uses an existing client; the configured timeout is not applied
    pub fn with_client(config: DirectoryConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    async fn error_for_status(response: reqwest::Response) -> DirectoryError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        DirectoryError::Status { status, body }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user(&self, user_id: u64) -> Result<Option<User>, DirectoryError> {
        let url = self.config.endpoint(&format!("users/{}", user_id));
        debug!(url = %url, "Fetching user");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| DirectoryError::network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let user: User = response
            .json()
            .await
            .map_err(|e| DirectoryError::invalid_response(e.to_string()))?;

        Ok(Some(user))
    }

    async fn create_user(&self, user_data: &UserData) -> Result<bool, DirectoryError> {
        validate_new_user(user_data)?;

        let email = user_data.get("email").and_then(|v| v.as_str()).unwrap_or_default();
        info!("Creating user: {}", email);

        let response = self
            .http_client
            .post(self.config.endpoint("users"))
            .bearer_auth(&self.config.api_key)
            .json(user_data)
            .send()
            .await
            .map_err(|e| DirectoryError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        Ok(true)
    }
}
