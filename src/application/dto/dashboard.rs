// src/application/dto/dashboard.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counters shown on the admin landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub team_members: u64,
    pub published_posts: u64,
    pub video_testimonials: u64,
    pub text_testimonials: u64,
}
