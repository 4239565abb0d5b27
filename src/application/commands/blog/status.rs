// src/application/commands/blog/status.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::{
        blog::BlogPostUpdate,
        content::{PublicationStatus, PublishRequest},
    },
};
use chrono::{DateTime, Utc};

/// Publish / unpublish button. Publishing without `published_at` stamps
/// the current time, even on a post that is already live.
#[derive(Debug, Clone)]
pub struct SetBlogStatusCommand {
    pub slug: String,
    pub status: PublicationStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogCommandService {
    pub async fn set_status(
        &self,
        actor: &AuthenticatedUser,
        command: SetBlogStatusCommand,
    ) -> ApplicationResult<BlogPostDto> {
        actor.require("blog", "publish")?;
        let post = self.load_by_slug(&command.slug).await?;
        let now = self.clock.now();

        let next = post.publish_state.apply(
            PublishRequest {
                status: Some(command.status),
                published_at: command.published_at,
            },
            now,
        )?;

        let update = BlogPostUpdate::new(post.id, now).with_publish_state(next);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            post_id = i64::from(updated.id),
            slug = %updated.slug,
            status = %updated.status(),
            published_at = ?updated.published_at(),
            actor = %actor.username,
            "blog post status changed"
        );
        self.authors.present(updated).await
    }
}
