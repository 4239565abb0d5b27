// src/application/dto/blog.rs
use crate::domain::{
    blog::BlogPost,
    content::PublicationStatus,
    team::TeamMember,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Byline embedded in blog responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummaryDto {
    pub id: i64,
    pub full_name: String,
    pub slug: String,
    pub photo_url: Option<String>,
    pub job_title: Option<String>,
}

impl From<&TeamMember> for AuthorSummaryDto {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id.into(),
            full_name: member.full_name.clone(),
            slug: member.slug.to_string(),
            photo_url: member.photo_url.clone(),
            job_title: member.job_title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogPostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Rich-text HTML.
    pub content: String,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: PublicationStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostDto {
    pub fn with_author(mut self, author: Option<AuthorSummaryDto>) -> Self {
        self.author = author;
        self
    }
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.into(),
            status: post.status(),
            published_at: post.published_at(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            featured_image: post.featured_image,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            author_id: post.author_id.map(Into::into),
            author: None,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
