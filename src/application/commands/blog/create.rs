// src/application/commands/blog/create.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::{
        blog::{NewBlogPost, PostTitle},
        content::{
            PublicationStatus, PublishRequest, PublishState,
            text::{optional_text, required_text},
        },
        team::TeamMemberId,
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct CreateBlogPostCommand {
    pub title: String,
    /// Derived from `title` when absent or blank.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: Option<PublicationStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<i64>,
}

impl BlogCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreateBlogPostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        actor.require("blog", "create")?;

        let now = self.clock.now();
        let publish_state = PublishState::initial(
            PublishRequest {
                status: command.status,
                published_at: command.published_at,
            },
            now,
        )?;
        Self::ensure_can_transition(actor, PublishState::draft(), publish_state)?;

        let title = PostTitle::new(command.title)?;
        let slug = self
            .slug_service
            .for_new(title.as_str(), command.slug.as_deref())?;
        let content = required_text("content", command.content)?;

        let author_id = command.author_id.map(TeamMemberId::new).transpose()?;
        if let Some(id) = author_id {
            self.authors.ensure_exists(id).await?;
        }

        let new_post = NewBlogPost {
            title,
            slug,
            excerpt: optional_text(command.excerpt),
            content,
            category: optional_text(command.category),
            featured_image: optional_text(command.featured_image),
            meta_title: optional_text(command.meta_title),
            meta_description: optional_text(command.meta_description),
            publish_state,
            author_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(
            post_id = i64::from(created.id),
            slug = %created.slug,
            status = %created.status(),
            actor = %actor.username,
            "blog post created"
        );
        self.authors.present(created).await
    }
}
