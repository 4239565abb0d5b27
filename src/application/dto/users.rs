// src/application/dto/users.rs
use crate::domain::user::{AdminUser, Capability, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::auth::AuthenticatedUser;

/// Account as shown to the panel. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<AdminUser> for AdminUserDto {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// `resource:action` pair, e.g. `blog:publish`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<Capability> for CapabilityView {
    fn from(value: Capability) -> Self {
        Self {
            resource: value.resource,
            action: value.action,
        }
    }
}

/// Response of `GET /api/v1/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user: AdminUserDto,
    pub capabilities: Vec<CapabilityView>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl UserProfileDto {
    pub fn from_parts(user: AdminUser, auth: &AuthenticatedUser, now: DateTime<Utc>) -> Self {
        let mut capabilities: Vec<CapabilityView> =
            auth.capabilities.iter().cloned().map(Into::into).collect();
        capabilities.sort();

        Self {
            user: user.into(),
            capabilities,
            expires_at: auth.expires_at,
            expires_in: (auth.expires_at - now).num_seconds().max(0),
        }
    }
}
