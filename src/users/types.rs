//! User record type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role value that marks an administrator
pub const ADMIN_ROLE: &str = "admin";

/// Status value that marks an active account
pub const ACTIVE_STATUS: &str = "active";

/// A single user record
///
/// Every field is optional. Keys other than the known ones are kept in
/// `extra` and take no part in aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// e.g. "admin", "user"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// e.g. "active", "inactive"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Builds a record from an arbitrary JSON value
    ///
    /// Fields of the wrong type are treated as absent. A non-object value
    /// yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        let extra = obj
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "id" | "name" | "email" | "role" | "status"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            id: obj.get("id").and_then(Value::as_u64),
            name: text("name"),
            email: text("email"),
            role: text("role"),
            status: text("status"),
            extra,
        }
    }

    /// Email address, or the empty string when absent
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some(ACTIVE_STATUS)
    }
}

/// Aggregated counts over one batch of user records
///
/// Every count is bounded by `total_users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserStats {
    /// Number of records in the batch
    pub total_users: usize,

    /// Records whose email passes the standard rule
    pub valid_emails: usize,

    /// Records with role "admin"
    pub admin_users: usize,

    /// Records with status "active"
    pub active_users: usize,
}
