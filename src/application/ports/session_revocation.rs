// src/application/ports/session_revocation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    /// Return true if the given session id has been revoked.
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;

    /// Revoke the given session id (on logout).
    async fn revoke(&self, session_id: &str) -> ApplicationResult<()>;
}
