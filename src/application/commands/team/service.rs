// src/application/commands/team/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::SlugService,
        team::{TeamMember, TeamMemberId, TeamMemberRepository},
    },
};

pub struct TeamCommandService {
    pub(super) repo: Arc<dyn TeamMemberRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TeamCommandService {
    pub fn new(
        repo: Arc<dyn TeamMemberRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<TeamMember> {
        let id = TeamMemberId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing("team member"))
    }
}
