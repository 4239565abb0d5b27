// src/application/commands/auth/logout.rs
use super::AuthCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl AuthCommandService {
    /// Revoke the caller's session. The token stays cryptographically valid
    /// until expiry but every later request with it is refused.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.security.session_revocation_store
            .revoke(&actor.session_id)
            .await?;
        tracing::info!(
            user_id = i64::from(actor.id),
            session_id = %actor.session_id,
            "admin signed out"
        );
        Ok(())
    }
}
