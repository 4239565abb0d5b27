// src/application/commands/blog/update.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::{
        blog::{BlogPostUpdate, PostTitle},
        content::{
            PublicationStatus, PublishRequest, SlugOrigin,
            text::{optional_text, required_text},
        },
        team::TeamMemberId,
    },
};
use chrono::{DateTime, Utc};

/// Edit form submission for the post currently living at `slug`.
/// `Some(None)` on a nullable field clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlogPostCommand {
    pub slug: String,
    pub title: Option<String>,
    /// Only an explicit value moves the post to a new URL; renaming does not.
    pub new_slug: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    pub category: Option<Option<String>>,
    pub featured_image: Option<Option<String>>,
    pub meta_title: Option<Option<String>>,
    pub meta_description: Option<Option<String>>,
    pub status: Option<PublicationStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<Option<i64>>,
}

impl BlogCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateBlogPostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        actor.require("blog", "update")?;
        let post = self.load_by_slug(&command.slug).await?;
        let now = self.clock.now();

        let title = command.title.map(PostTitle::new).transpose()?;
        let display = title.as_ref().unwrap_or(&post.title);
        let slug = self.slug_service.resolve(
            display.as_str(),
            command.new_slug.as_deref(),
            SlugOrigin::Existing,
        )?;

        let request = PublishRequest {
            status: command.status,
            published_at: command.published_at,
        };
        let publish_state = Self::next_publish_state(actor, post.publish_state, request, now)?;

        let author_id = command
            .author_id
            .map(|value| value.map(TeamMemberId::new).transpose())
            .transpose()?;
        if let Some(Some(id)) = author_id {
            self.authors.ensure_exists(id).await?;
        }

        let update = BlogPostUpdate {
            title,
            slug,
            excerpt: command.excerpt.map(optional_text),
            content: command
                .content
                .map(|c| required_text("content", c))
                .transpose()?,
            category: command.category.map(optional_text),
            featured_image: command.featured_image.map(optional_text),
            meta_title: command.meta_title.map(optional_text),
            meta_description: command.meta_description.map(optional_text),
            publish_state,
            author_id,
            ..BlogPostUpdate::new(post.id, now)
        };

        let updated = self.write_repo.update(update).await?;
        if !post.is_published() && updated.is_published() {
            tracing::info!(post_id = i64::from(updated.id), slug = %updated.slug, "blog post published");
        }
        tracing::info!(
            post_id = i64::from(updated.id),
            slug = %updated.slug,
            actor = %actor.username,
            "blog post updated"
        );
        self.authors.present(updated).await
    }
}
