// src/application/queries/blog/get_by_slug.rs
use super::BlogQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::Slug,
};

pub struct GetBlogPostBySlugQuery {
    pub slug: String,
}

impl BlogQueryService {
    /// Drafts answer 404 to anyone who cannot see them.
    pub async fn get_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetBlogPostBySlugQuery,
    ) -> ApplicationResult<BlogPostDto> {
        let not_found = || ApplicationError::missing("blog post");
        let slug = Slug::new(query.slug).map_err(|_| not_found())?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_published() || Self::sees_drafts(actor))
            .ok_or_else(not_found)?;

        self.authors.present(post).await
    }
}
