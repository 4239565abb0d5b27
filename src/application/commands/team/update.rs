// src/application/commands/team/update.rs
use super::TeamCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TeamMemberDto},
        error::ApplicationResult,
    },
    domain::{
        content::{
            OrderIndex, SlugOrigin,
            text::{optional_text, required_text},
        },
        team::{SocialLinks, TeamMemberUpdate},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMemberCommand {
    pub id: i64,
    pub full_name: Option<String>,
    /// A rename keeps the public profile URL unless this is supplied.
    pub slug: Option<String>,
    pub job_title: Option<Option<String>>,
    pub department: Option<Option<String>>,
    pub short_bio: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub photo_url: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub social_links: Option<SocialLinks>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

impl TeamCommandService {
    pub async fn update_member(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTeamMemberCommand,
    ) -> ApplicationResult<TeamMemberDto> {
        actor.require("team", "update")?;
        let member = self.load(command.id).await?;

        let full_name = command
            .full_name
            .map(|name| required_text("full_name", name))
            .transpose()?;
        let slug = self.slug_service.resolve(
            full_name.as_deref().unwrap_or(&member.full_name),
            command.slug.as_deref(),
            SlugOrigin::Existing,
        )?;

        let update = TeamMemberUpdate {
            full_name,
            slug,
            job_title: command.job_title.map(optional_text),
            department: command.department.map(optional_text),
            short_bio: command.short_bio.map(optional_text),
            bio: command.bio.map(optional_text),
            location: command.location.map(optional_text),
            email: command.email.map(optional_text),
            phone: command.phone.map(optional_text),
            photo_url: command.photo_url.map(optional_text),
            is_featured: command.is_featured,
            social_links: command.social_links.map(SocialLinks::normalized),
            visible: command.visible,
            order_index: command.order_index.map(OrderIndex::new),
            ..TeamMemberUpdate::new(member.id, self.clock.now())
        };

        let updated = self.repo.update(update).await?;
        tracing::info!(
            member_id = i64::from(updated.id),
            slug = %updated.slug,
            actor = %actor.username,
            "team member updated"
        );
        Ok(updated.into())
    }
}
