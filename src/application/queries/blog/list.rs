// src/application/queries/blog/list.rs
use super::BlogQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogPostDto},
        error::ApplicationResult,
    },
    domain::{
        blog::{BlogListOrder, BlogPostFilter},
        content::{PublicationStatus, text::optional_text},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListBlogPostsQuery {
    /// Ignored for callers who cannot see drafts.
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    pub order: BlogListOrder,
}

impl BlogQueryService {
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListBlogPostsQuery,
    ) -> ApplicationResult<Vec<BlogPostDto>> {
        let filter = BlogPostFilter {
            include_drafts: Self::sees_drafts(actor),
            status: query.status,
            category: optional_text(query.category),
            order: query.order,
        };

        let posts = self.read_repo.list(&filter).await?;
        self.authors.present_all(posts).await
    }
}
