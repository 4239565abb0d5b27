// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

/// Back-office account. Site visitors never have one.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewAdminUser {
    pub fn active(
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role,
            is_active: true,
            created_at,
        }
    }
}
