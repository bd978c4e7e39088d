use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Marketplace account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Vendor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Vendor => "Vendor",
            UserRole::Admin => "Admin",
        }
    }
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Suspended => "Suspended",
            UserStatus::Pending => "Pending",
        }
    }
}

/// A user row as listed by the admin user-management endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(default)]
    pub events_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// Account action an admin can apply to one or many users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAction {
    Activate,
    Suspend,
    Delete,
}

impl UserAction {
    pub fn label(&self) -> &'static str {
        match self {
            UserAction::Activate => "Activate",
            UserAction::Suspend => "Suspend",
            UserAction::Delete => "Delete",
        }
    }

    /// Whether the action changes anything for a user in `status`.
    pub fn applies_to(&self, status: UserStatus) -> bool {
        match self {
            UserAction::Activate => status != UserStatus::Active,
            UserAction::Suspend => status != UserStatus::Suspended,
            UserAction::Delete => true,
        }
    }
}

/// Request body for the bulk user-action endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUserActionRequest {
    pub action: UserAction,
    pub user_ids: Vec<Uuid>,
}

impl BulkUserActionRequest {
    /// Build a request, rejecting an empty selection and dropping duplicate ids.
    pub fn new(action: UserAction, user_ids: &[Uuid]) -> Result<Self, AppError> {
        let mut ids: Vec<Uuid> = Vec::with_capacity(user_ids.len());
        for id in user_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        if ids.is_empty() {
            return Err(AppError::bad_request("Select at least one user"));
        }
        Ok(Self {
            action,
            user_ids: ids,
        })
    }
}

/// Response from the bulk user-action endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkActionResult {
    pub affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_request_rejects_empty_selection() {
        let err = BulkUserActionRequest::new(UserAction::Suspend, &[]).unwrap_err();
        assert_eq!(err.message, "Select at least one user");
    }

    #[test]
    fn bulk_request_dedupes_ids_preserving_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let req = BulkUserActionRequest::new(UserAction::Delete, &[a, b, a]).unwrap();
        assert_eq!(req.user_ids, vec![a, b]);
    }

    #[test]
    fn actions_apply_only_when_they_change_status() {
        assert!(!UserAction::Activate.applies_to(UserStatus::Active));
        assert!(UserAction::Activate.applies_to(UserStatus::Suspended));
        assert!(!UserAction::Suspend.applies_to(UserStatus::Suspended));
        assert!(UserAction::Delete.applies_to(UserStatus::Active));
    }

    #[test]
    fn admin_user_parses_api_json() {
        let json = r#"{
            "id": "7f1c2d4e-0000-4000-8000-000000000001",
            "name": "Dana Reyes",
            "email": "dana@example.com",
            "role": "vendor",
            "status": "pending",
            "created_at": "2026-03-01T10:00:00Z"
        }"#;
        let user: AdminUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Vendor);
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.events_count, 0);
        assert!(user.last_login.is_none());
    }
}
