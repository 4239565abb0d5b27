// src/domain/blog/repository.rs
use crate::domain::blog::entity::{BlogPost, BlogPostUpdate, NewBlogPost};
use crate::domain::blog::value_objects::BlogPostId;
use crate::domain::content::{PublicationStatus, Slug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlogListOrder {
    /// `created_at DESC, id DESC` as used by the admin table.
    #[default]
    Newest,
    /// `published_at DESC` for the public feed.
    RecentlyPublished,
}

#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    /// When false only published posts are returned and `status` is ignored.
    pub include_drafts: bool,
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    pub order: BlogListOrder,
}

impl BlogPostFilter {
    pub fn published_only() -> Self {
        Self::default()
    }

    /// Effective status restriction after applying the draft rule.
    pub fn effective_status(&self) -> Option<PublicationStatus> {
        if self.include_drafts {
            self.status
        } else {
            Some(PublicationStatus::Published)
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        self.effective_status().is_none_or(|s| post.status() == s)
            && self
                .category
                .as_deref()
                .is_none_or(|c| post.category.as_deref() == Some(c))
    }
}

#[async_trait]
pub trait BlogPostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost>;
    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost>;
    async fn delete(&self, id: BlogPostId) -> DomainResult<()>;
}

#[async_trait]
pub trait BlogPostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BlogPostId) -> DomainResult<Option<BlogPost>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>>;
    async fn list(&self, filter: &BlogPostFilter) -> DomainResult<Vec<BlogPost>>;
    async fn count_published(&self) -> DomainResult<u64>;
}
