// src/application/queries/dashboard.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, DashboardStatsDto},
        error::ApplicationResult,
    },
    domain::{
        blog::BlogPostReadRepository,
        team::TeamMemberRepository,
        testimonial::{TextTestimonialRepository, VideoTestimonialRepository},
    },
};

pub struct DashboardQueryService {
    team_repo: Arc<dyn TeamMemberRepository>,
    blog_repo: Arc<dyn BlogPostReadRepository>,
    text_repo: Arc<dyn TextTestimonialRepository>,
    video_repo: Arc<dyn VideoTestimonialRepository>,
}

impl DashboardQueryService {
    pub fn new(
        team_repo: Arc<dyn TeamMemberRepository>,
        blog_repo: Arc<dyn BlogPostReadRepository>,
        text_repo: Arc<dyn TextTestimonialRepository>,
        video_repo: Arc<dyn VideoTestimonialRepository>,
    ) -> Self {
        Self {
            team_repo,
            blog_repo,
            text_repo,
            video_repo,
        }
    }

    pub async fn stats(&self, actor: &AuthenticatedUser) -> ApplicationResult<DashboardStatsDto> {
        actor.require("dashboard", "read")?;

        let (team_members, published_posts, video_testimonials, text_testimonials) = tokio::try_join!(
            self.team_repo.count(),
            self.blog_repo.count_published(),
            self.video_repo.count_visible(),
            self.text_repo.count_visible(),
        )?;

        Ok(DashboardStatsDto {
            team_members,
            published_posts,
            video_testimonials,
            text_testimonials,
        })
    }
}
