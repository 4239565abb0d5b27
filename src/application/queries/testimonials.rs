// src/application/queries/testimonials.rs
use std::sync::Arc;

use super::sees_hidden;
use crate::{
    application::{
        dto::{AuthenticatedUser, TextTestimonialDto, VideoTestimonialDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::sort_for_display,
        testimonial::{
            TextTestimonialId, TextTestimonialRepository, VideoTestimonialId,
            VideoTestimonialRepository,
        },
    },
};

const RESOURCE: &str = "testimonials";

pub struct TestimonialQueryService {
    text_repo: Arc<dyn TextTestimonialRepository>,
    video_repo: Arc<dyn VideoTestimonialRepository>,
}

impl TestimonialQueryService {
    pub fn new(
        text_repo: Arc<dyn TextTestimonialRepository>,
        video_repo: Arc<dyn VideoTestimonialRepository>,
    ) -> Self {
        Self {
            text_repo,
            video_repo,
        }
    }

    pub async fn list_text(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<TextTestimonialDto>> {
        let mut items = self.text_repo.list(sees_hidden(actor, RESOURCE)).await?;
        sort_for_display(&mut items);
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_text(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<TextTestimonialDto> {
        let id = TextTestimonialId::new(id)?;
        self.text_repo
            .find_by_id(id)
            .await?
            .filter(|t| t.visible || sees_hidden(actor, RESOURCE))
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("text testimonial"))
    }

    pub async fn list_video(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<VideoTestimonialDto>> {
        let mut items = self.video_repo.list(sees_hidden(actor, RESOURCE)).await?;
        sort_for_display(&mut items);
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_video(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<VideoTestimonialDto> {
        let id = VideoTestimonialId::new(id)?;
        self.video_repo
            .find_by_id(id)
            .await?
            .filter(|t| t.visible || sees_hidden(actor, RESOURCE))
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("video testimonial"))
    }
}
