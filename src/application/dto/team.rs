// src/application/dto/team.rs
use crate::domain::team::{SocialLinks, TeamMember};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub id: i64,
    pub full_name: String,
    pub slug: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub short_bio: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub is_featured: bool,
    pub social_links: SocialLinks,
    pub visible: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberDto {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id.into(),
            full_name: member.full_name,
            slug: member.slug.into_inner(),
            job_title: member.job_title,
            department: member.department,
            short_bio: member.short_bio,
            bio: member.bio,
            location: member.location,
            email: member.email,
            phone: member.phone,
            photo_url: member.photo_url,
            is_featured: member.is_featured,
            social_links: member.social_links,
            visible: member.visible,
            order_index: member.order_index.into(),
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
