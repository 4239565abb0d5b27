// src/application/commands/team/create.rs
use super::TeamCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TeamMemberDto},
        error::ApplicationResult,
    },
    domain::{
        content::{
            OrderIndex,
            text::{optional_text, required_text},
        },
        team::{NewTeamMember, SocialLinks},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateTeamMemberCommand {
    pub full_name: String,
    /// Derived from `full_name` when absent or blank.
    pub slug: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub short_bio: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub is_featured: Option<bool>,
    pub social_links: Option<SocialLinks>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

impl TeamCommandService {
    pub async fn create_member(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTeamMemberCommand,
    ) -> ApplicationResult<TeamMemberDto> {
        actor.require("team", "create")?;

        let full_name = required_text("full_name", command.full_name)?;
        let slug = self
            .slug_service
            .for_new(&full_name, command.slug.as_deref())?;

        let new_member = NewTeamMember {
            full_name,
            slug,
            job_title: optional_text(command.job_title),
            department: optional_text(command.department),
            short_bio: optional_text(command.short_bio),
            bio: optional_text(command.bio),
            location: optional_text(command.location),
            email: optional_text(command.email),
            phone: optional_text(command.phone),
            photo_url: optional_text(command.photo_url),
            is_featured: command.is_featured.unwrap_or(false),
            social_links: command
                .social_links
                .map(SocialLinks::normalized)
                .unwrap_or_default(),
            visible: command.visible.unwrap_or(true),
            order_index: command
                .order_index
                .map(OrderIndex::new)
                .unwrap_or_default(),
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(new_member).await?;
        tracing::info!(
            member_id = i64::from(created.id),
            slug = %created.slug,
            actor = %actor.username,
            "team member created"
        );
        Ok(created.into())
    }
}
