// src/application/commands/blog/delete.rs
use super::BlogCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

#[derive(Debug, Clone)]
pub struct DeleteBlogPostCommand {
    pub slug: String,
}

impl BlogCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteBlogPostCommand,
    ) -> ApplicationResult<()> {
        actor.require("blog", "delete")?;
        let post = self.load_by_slug(&command.slug).await?;
        self.write_repo.delete(post.id).await?;
        tracing::info!(
            post_id = i64::from(post.id),
            slug = %post.slug,
            actor = %actor.username,
            "blog post deleted"
        );
        Ok(())
    }
}
