// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use showroom_cms::{
    application::{
        ApplicationResult,
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{security::PasswordHasher, time::Clock},
    },
    domain::{
        errors::{DomainError, DomainResult},
        user::{AdminUser, NewAdminUser, PasswordHash, Role, UserId, UserRepository, Username},
    },
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery";
pub const EDITOR_USERNAME: &str = "editor";
pub const EDITOR_PASSWORD: &str = "editor-pass";

/// Wall clock that tests move by hand.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Stores `plain:<password>` so tests can reason about hashes.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepo {
    users: Arc<Mutex<Vec<AdminUser>>>,
}

impl InMemoryUserRepo {
    /// One admin and one editor, both active.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let repo = Self::default();
        repo.push(ADMIN_USERNAME, ADMIN_PASSWORD, Role::Admin, true, now);
        repo.push(EDITOR_USERNAME, EDITOR_PASSWORD, Role::Editor, true, now);
        repo
    }

    pub fn push(&self, username: &str, password: &str, role: Role, is_active: bool, now: DateTime<Utc>) {
        let mut users = self.users.lock().unwrap();
        let id = UserId(users.len() as i64 + 1);
        users.push(AdminUser {
            id,
            username: Username::new(username).unwrap(),
            password_hash: PasswordHash::new(format!("plain:{password}")).unwrap(),
            role,
            is_active,
            created_at: now,
        });
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewAdminUser) -> DomainResult<AdminUser> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already taken".into()));
        }
        let user = AdminUser {
            id: UserId(users.len() as i64 + 1),
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<AdminUser>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<AdminUser>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }
}

fn actor(id: i64, username: &str, role: Role, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId(id),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
        session_id: format!("session-{username}"),
    }
}

pub fn admin_actor(now: DateTime<Utc>) -> AuthenticatedUser {
    actor(1, ADMIN_USERNAME, Role::Admin, now)
}

pub fn editor_actor(now: DateTime<Utc>) -> AuthenticatedUser {
    actor(2, EDITOR_USERNAME, Role::Editor, now)
}

/// Signed in, but without a single capability.
pub fn actor_without_capabilities(now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        capabilities: HashSet::new(),
        ..actor(3, "viewer", Role::Editor, now)
    }
}
