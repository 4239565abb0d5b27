// src/application/queries/auth.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::user::UserRepository,
};

pub struct AuthQueryService {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl AuthQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::missing("user"))?;

        Ok(UserProfileDto::from_parts(user, actor, self.clock.now()))
    }
}
