// src/application/commands/auth/login.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::{AdminUserDto, AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{AdminUser, Username},
};
use uuid::Uuid;

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: AdminUserDto,
}

impl AuthCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .find_and_authenticate_user(&username, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
            session_id: Uuid::new_v4().to_string(),
        };
        let token = self.security.token_manager.issue(subject).await?;

        tracing::info!(
            user_id = i64::from(user.id),
            username = %user.username,
            session_id = %token.session_id,
            "admin signed in"
        );

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> ApplicationResult<AdminUser> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.security.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        Ok(user)
    }
}
