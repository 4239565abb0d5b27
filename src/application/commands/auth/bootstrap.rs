// src/application/commands/auth/bootstrap.rs
use super::{AuthCommandService, password::validate_password};
use crate::{
    application::{dto::AdminUserDto, error::ApplicationResult},
    domain::user::{NewAdminUser, PasswordHash, Role, Username},
};

pub struct BootstrapAdminCommand {
    pub username: String,
    pub password: String,
}

impl AuthCommandService {
    /// Seed the first administrator. Does nothing once any account exists.
    pub async fn bootstrap_admin(
        &self,
        command: BootstrapAdminCommand,
    ) -> ApplicationResult<Option<AdminUserDto>> {
        if self.users.count().await? > 0 {
            return Ok(None);
        }

        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        let hashed = self.security.password_hasher.hash(&command.password).await?;
        let new_user = NewAdminUser::active(
            username,
            PasswordHash::new(hashed)?,
            Role::Admin,
            self.clock.now(),
        );
        let user = self.users.insert(new_user).await?;
        tracing::info!(user_id = i64::from(user.id), username = %user.username, "bootstrap admin created");
        Ok(Some(user.into()))
    }
}
