// src/application/commands/auth/mod.rs
mod bootstrap;
mod login;
mod logout;
mod password;

use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, services::SecurityPorts},
    domain::user::UserRepository,
};

pub use bootstrap::BootstrapAdminCommand;
pub use login::{LoginCommand, LoginResult};

/// Sign-in, sign-out and first-run seeding of admin accounts.
pub struct AuthCommandService {
    users: Arc<dyn UserRepository>,
    security: SecurityPorts,
    clock: Arc<dyn Clock>,
}

impl AuthCommandService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        security: SecurityPorts,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            security,
            clock,
        }
    }
}
