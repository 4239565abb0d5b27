// src/domain/team/repository.rs
use crate::domain::content::Slug;
use crate::domain::errors::DomainResult;
use crate::domain::team::entity::{NewTeamMember, TeamMember, TeamMemberId, TeamMemberUpdate};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct TeamMemberFilter {
    pub include_hidden: bool,
    pub featured_only: bool,
    pub department: Option<String>,
}

impl TeamMemberFilter {
    pub fn matches(&self, member: &TeamMember) -> bool {
        (self.include_hidden || member.visible)
            && (!self.featured_only || member.is_featured)
            && self
                .department
                .as_deref()
                .is_none_or(|d| member.department.as_deref() == Some(d))
    }
}

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    async fn insert(&self, member: NewTeamMember) -> DomainResult<TeamMember>;
    async fn update(&self, update: TeamMemberUpdate) -> DomainResult<TeamMember>;
    async fn delete(&self, id: TeamMemberId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TeamMemberId) -> DomainResult<Option<TeamMember>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<TeamMember>>;
    /// Batch lookup used to embed blog authors; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[TeamMemberId]) -> DomainResult<Vec<TeamMember>>;
    /// Rows in display order (`order_index`, then creation order).
    async fn list(&self, filter: &TeamMemberFilter) -> DomainResult<Vec<TeamMember>>;
    async fn count(&self) -> DomainResult<u64>;
}
