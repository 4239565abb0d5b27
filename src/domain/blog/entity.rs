// src/domain/blog/entity.rs
use crate::domain::blog::value_objects::{BlogPostId, PostTitle};
use crate::domain::content::{PublicationStatus, PublishState, Slug};
use crate::domain::team::TeamMemberId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: Option<String>,
    /// HTML produced by the admin rich-text editor, stored verbatim.
    pub content: String,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub publish_state: PublishState,
    pub author_id: Option<TeamMemberId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn status(&self) -> PublicationStatus {
        self.publish_state.status
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_state.published_at
    }

    pub fn is_published(&self) -> bool {
        self.publish_state.is_published()
    }
}

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub publish_state: PublishState,
    pub author_id: Option<TeamMemberId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial write. `None` leaves a column alone; `Some(None)` clears a
/// nullable column.
#[derive(Debug, Clone)]
pub struct BlogPostUpdate {
    pub id: BlogPostId,
    pub title: Option<PostTitle>,
    pub slug: Option<Slug>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    pub category: Option<Option<String>>,
    pub featured_image: Option<Option<String>>,
    pub meta_title: Option<Option<String>>,
    pub meta_description: Option<Option<String>>,
    pub publish_state: Option<PublishState>,
    pub author_id: Option<Option<TeamMemberId>>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostUpdate {
    pub fn new(id: BlogPostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            category: None,
            featured_image: None,
            meta_title: None,
            meta_description: None,
            publish_state: None,
            author_id: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_publish_state(mut self, state: PublishState) -> Self {
        self.publish_state = Some(state);
        self
    }

    /// Fold this update into an in-memory copy of the post, mirroring what the
    /// repository writes.
    pub fn apply_to(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            post.slug = slug.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt.clone_from(excerpt);
        }
        if let Some(content) = &self.content {
            post.content.clone_from(content);
        }
        if let Some(category) = &self.category {
            post.category.clone_from(category);
        }
        if let Some(image) = &self.featured_image {
            post.featured_image.clone_from(image);
        }
        if let Some(meta_title) = &self.meta_title {
            post.meta_title.clone_from(meta_title);
        }
        if let Some(meta_description) = &self.meta_description {
            post.meta_description.clone_from(meta_description);
        }
        if let Some(state) = self.publish_state {
            post.publish_state = state;
        }
        if let Some(author_id) = self.author_id {
            post.author_id = author_id;
        }
        post.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{PublishRequest, PublicationStatus};

    fn sample_post() -> BlogPost {
        let now = Utc::now();
        BlogPost {
            id: BlogPostId::new(1).unwrap(),
            title: PostTitle::new("Launch week").unwrap(),
            slug: Slug::new("launch-week").unwrap(),
            excerpt: Some("short".into()),
            content: "<p>hello</p>".into(),
            category: None,
            featured_image: None,
            meta_title: None,
            meta_description: None,
            publish_state: PublishState::draft(),
            author_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn apply_to_merges_only_present_fields() {
        let mut post = sample_post();
        let later = post.updated_at + chrono::Duration::seconds(5);
        let state = post
            .publish_state
            .apply(PublishRequest::to(PublicationStatus::Published), later)
            .unwrap();
        let update = BlogPostUpdate {
            excerpt: Some(None),
            ..BlogPostUpdate::new(post.id, later)
        }
        .with_title(PostTitle::new("Launch week recap").unwrap())
        .with_publish_state(state);

        update.apply_to(&mut post);

        assert_eq!(post.title.as_str(), "Launch week recap");
        assert_eq!(post.slug.as_str(), "launch-week");
        assert_eq!(post.excerpt, None);
        assert!(post.is_published());
        assert_eq!(post.published_at(), Some(later));
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(PostTitle::new("  Hi  ").unwrap().as_str(), "Hi");
        assert!(PostTitle::new(" ").is_err());
    }
}
