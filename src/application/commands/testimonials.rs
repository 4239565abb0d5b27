// src/application/commands/testimonials.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, TextTestimonialDto, VideoTestimonialDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{
            OrderIndex,
            text::{optional_text, required_text},
        },
        testimonial::{
            NewTextTestimonial, NewVideoTestimonial, Rating, TextTestimonialId,
            TextTestimonialRepository, TextTestimonialUpdate, VideoTestimonialId,
            VideoTestimonialRepository, VideoTestimonialUpdate,
        },
    },
};

const RESOURCE: &str = "testimonials";

#[derive(Debug, Clone, Default)]
pub struct CreateTextTestimonialCommand {
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_position: Option<String>,
    pub testimonial_text: String,
    pub rating: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTextTestimonialCommand {
    pub id: i64,
    pub client_name: Option<String>,
    pub client_company: Option<Option<String>>,
    pub client_position: Option<Option<String>>,
    pub testimonial_text: Option<String>,
    pub rating: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateVideoTestimonialCommand {
    pub client_name: String,
    pub client_company: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateVideoTestimonialCommand {
    pub id: i64,
    pub client_name: Option<String>,
    pub client_company: Option<Option<String>>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<Option<String>>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

pub struct TestimonialCommandService {
    text_repo: Arc<dyn TextTestimonialRepository>,
    video_repo: Arc<dyn VideoTestimonialRepository>,
    clock: Arc<dyn Clock>,
}

impl TestimonialCommandService {
    pub fn new(
        text_repo: Arc<dyn TextTestimonialRepository>,
        video_repo: Arc<dyn VideoTestimonialRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            text_repo,
            video_repo,
            clock,
        }
    }

    pub async fn create_text(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTextTestimonialCommand,
    ) -> ApplicationResult<TextTestimonialDto> {
        actor.require(RESOURCE, "create")?;

        let testimonial = NewTextTestimonial {
            client_name: required_text("client_name", command.client_name)?,
            client_company: optional_text(command.client_company),
            client_position: optional_text(command.client_position),
            testimonial_text: required_text("testimonial_text", command.testimonial_text)?,
            rating: command.rating.map(Rating::new).transpose()?.unwrap_or_default(),
            visible: command.visible.unwrap_or(true),
            order_index: command.order_index.map(OrderIndex::new).unwrap_or_default(),
            created_at: self.clock.now(),
        };

        let created = self.text_repo.insert(testimonial).await?;
        tracing::info!(
            testimonial_id = i64::from(created.id),
            actor = %actor.username,
            "text testimonial created"
        );
        Ok(created.into())
    }

    pub async fn update_text(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTextTestimonialCommand,
    ) -> ApplicationResult<TextTestimonialDto> {
        actor.require(RESOURCE, "update")?;
        let id = self.existing_text(command.id).await?;

        let update = TextTestimonialUpdate {
            id,
            client_name: command
                .client_name
                .map(|v| required_text("client_name", v))
                .transpose()?,
            client_company: command.client_company.map(optional_text),
            client_position: command.client_position.map(optional_text),
            testimonial_text: command
                .testimonial_text
                .map(|v| required_text("testimonial_text", v))
                .transpose()?,
            rating: command.rating.map(Rating::new).transpose()?,
            visible: command.visible,
            order_index: command.order_index.map(OrderIndex::new),
            updated_at: self.clock.now(),
        };

        Ok(self.text_repo.update(update).await?.into())
    }

    pub async fn delete_text(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        actor.require(RESOURCE, "delete")?;
        let id = self.existing_text(id).await?;
        self.text_repo.delete(id).await?;
        tracing::info!(testimonial_id = i64::from(id), actor = %actor.username, "text testimonial deleted");
        Ok(())
    }

    pub async fn create_video(
        &self,
        actor: &AuthenticatedUser,
        command: CreateVideoTestimonialCommand,
    ) -> ApplicationResult<VideoTestimonialDto> {
        actor.require(RESOURCE, "create")?;

        let testimonial = NewVideoTestimonial {
            client_name: required_text("client_name", command.client_name)?,
            client_company: optional_text(command.client_company),
            video_url: required_text("video_url", command.video_url)?,
            thumbnail_url: optional_text(command.thumbnail_url),
            visible: command.visible.unwrap_or(true),
            order_index: command.order_index.map(OrderIndex::new).unwrap_or_default(),
            created_at: self.clock.now(),
        };

        let created = self.video_repo.insert(testimonial).await?;
        tracing::info!(
            testimonial_id = i64::from(created.id),
            actor = %actor.username,
            "video testimonial created"
        );
        Ok(created.into())
    }

    pub async fn update_video(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateVideoTestimonialCommand,
    ) -> ApplicationResult<VideoTestimonialDto> {
        actor.require(RESOURCE, "update")?;
        let id = self.existing_video(command.id).await?;

        let update = VideoTestimonialUpdate {
            id,
            client_name: command
                .client_name
                .map(|v| required_text("client_name", v))
                .transpose()?,
            client_company: command.client_company.map(optional_text),
            video_url: command
                .video_url
                .map(|v| required_text("video_url", v))
                .transpose()?,
            thumbnail_url: command.thumbnail_url.map(optional_text),
            visible: command.visible,
            order_index: command.order_index.map(OrderIndex::new),
            updated_at: self.clock.now(),
        };

        Ok(self.video_repo.update(update).await?.into())
    }

    pub async fn delete_video(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        actor.require(RESOURCE, "delete")?;
        let id = self.existing_video(id).await?;
        self.video_repo.delete(id).await?;
        tracing::info!(testimonial_id = i64::from(id), actor = %actor.username, "video testimonial deleted");
        Ok(())
    }

    async fn existing_text(&self, id: i64) -> ApplicationResult<TextTestimonialId> {
        let id = TextTestimonialId::new(id)?;
        self.text_repo
            .find_by_id(id)
            .await?
            .map(|t| t.id)
            .ok_or_else(|| ApplicationError::missing("text testimonial"))
    }

    async fn existing_video(&self, id: i64) -> ApplicationResult<VideoTestimonialId> {
        let id = VideoTestimonialId::new(id)?;
        self.video_repo
            .find_by_id(id)
            .await?
            .map(|t| t.id)
            .ok_or_else(|| ApplicationError::missing("video testimonial"))
    }
}
