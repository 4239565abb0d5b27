// src/infrastructure/security/session_store.rs
use crate::application::ApplicationResult;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Process-local revocation list. Revocations are lost on restart.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: RwLock<HashSet<String>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        Ok(self.revoked.read().await.contains(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        self.revoked.write().await.insert(session_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revocation_is_per_session() {
        let store = InMemorySessionRevocationStore::new();
        store.revoke("a").await.unwrap();
        assert!(store.is_revoked("a").await.unwrap());
        assert!(!store.is_revoked("b").await.unwrap());
    }
}
