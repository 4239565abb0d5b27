// src/application/queries/team.rs
use std::sync::Arc;

use super::sees_hidden;
use crate::{
    application::{
        dto::{AuthenticatedUser, TeamMemberDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{Slug, sort_for_display, text::optional_text},
        team::{TeamMember, TeamMemberFilter, TeamMemberId, TeamMemberRepository},
    },
};

const RESOURCE: &str = "team";

#[derive(Debug, Clone, Default)]
pub struct ListTeamMembersQuery {
    pub featured_only: bool,
    pub department: Option<String>,
}

pub struct TeamQueryService {
    repo: Arc<dyn TeamMemberRepository>,
}

impl TeamQueryService {
    pub fn new(repo: Arc<dyn TeamMemberRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_members(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListTeamMembersQuery,
    ) -> ApplicationResult<Vec<TeamMemberDto>> {
        let filter = TeamMemberFilter {
            include_hidden: sees_hidden(actor, RESOURCE),
            featured_only: query.featured_only,
            department: optional_text(query.department),
        };
        let mut members = self.repo.list(&filter).await?;
        sort_for_display(&mut members);
        Ok(members.into_iter().map(Into::into).collect())
    }

    pub async fn get_member(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<TeamMemberDto> {
        let id = TeamMemberId::new(id)?;
        let member = self.repo.find_by_id(id).await?;
        Self::visible_to(actor, member)
    }

    /// Public profile page lookup.
    pub async fn get_member_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: String,
    ) -> ApplicationResult<TeamMemberDto> {
        let Ok(slug) = Slug::new(slug) else {
            return Err(ApplicationError::missing("team member"));
        };
        let member = self.repo.find_by_slug(&slug).await?;
        Self::visible_to(actor, member)
    }

    fn visible_to(
        actor: Option<&AuthenticatedUser>,
        member: Option<TeamMember>,
    ) -> ApplicationResult<TeamMemberDto> {
        member
            .filter(|m| m.visible || sees_hidden(actor, RESOURCE))
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("team member"))
    }
}
