// src/application/dto/auth.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{Capability, Role, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// Bearer credential handed to the admin panel after login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    /// Base64 biscuit; send as `Authorization: Bearer <token>`.
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Seconds until `expires_at`.
    pub expires_in: i64,
    pub session_id: String,
}

/// Admin session resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub session_id: String,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    /// Guard used at the top of every write use case.
    pub fn require(&self, resource: &str, action: &str) -> ApplicationResult<()> {
        if self.has_capability(resource, action) {
            return Ok(());
        }
        tracing::debug!(user = %self.username, resource, action, "capability check failed");
        Err(ApplicationError::forbidden(format!(
            "{} may not {action} {resource}",
            self.role
        )))
    }
}

/// Everything a freshly minted token asserts about its holder.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub session_id: String,
}
