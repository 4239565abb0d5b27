// src/infrastructure/repositories/postgres_blog.rs
use super::error::{map_sqlx, to_count};
use crate::domain::blog::{
    BlogListOrder, BlogPost, BlogPostFilter, BlogPostId, BlogPostReadRepository, BlogPostUpdate,
    BlogPostWriteRepository, NewBlogPost, PostTitle,
};
use crate::domain::content::{PublicationStatus, PublishState, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::TeamMemberId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, category, featured_image, \
     meta_title, meta_description, status, published_at, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBlogPostWriteRepository {
    pool: PgPool,
}

impl PostgresBlogPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogPostReadRepository {
    pool: PgPool,
}

impl PostgresBlogPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogPostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    category: Option<String>,
    featured_image: Option<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    author_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: BlogPostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BlogPostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            content: row.content,
            category: row.category,
            featured_image: row.featured_image,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            publish_state: PublishState {
                status: row.status.parse::<PublicationStatus>()?,
                published_at: row.published_at,
            },
            author_id: row.author_id.map(TeamMemberId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BlogPostWriteRepository for PostgresBlogPostWriteRepository {
    async fn insert(&self, post: NewBlogPost) -> DomainResult<BlogPost> {
        let NewBlogPost {
            title,
            slug,
            excerpt,
            content,
            category,
            featured_image,
            meta_title,
            meta_description,
            publish_state,
            author_id,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "INSERT INTO blog_posts (title, slug, excerpt, content, category, featured_image,
                 meta_title, meta_description, status, published_at, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt)
        .bind(content)
        .bind(category)
        .bind(featured_image)
        .bind(meta_title)
        .bind(meta_description)
        .bind(publish_state.status.as_str())
        .bind(publish_state.published_at)
        .bind(author_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlogPost::try_from(row)
    }

    async fn update(&self, update: BlogPostUpdate) -> DomainResult<BlogPost> {
        let BlogPostUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            category,
            featured_image,
            meta_title,
            meta_description,
            publish_state,
            author_id,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE blog_posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(image);
        }
        if let Some(meta_title) = meta_title {
            builder.push(", meta_title = ");
            builder.push_bind(meta_title);
        }
        if let Some(meta_description) = meta_description {
            builder.push(", meta_description = ");
            builder.push_bind(meta_description);
        }
        if let Some(state) = publish_state {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }
        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(author_id.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        builder
            .build_query_as::<BlogPostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("blog post"))
            .and_then(BlogPost::try_from)
    }

    async fn delete(&self, id: BlogPostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("blog post"));
        }
        Ok(())
    }
}

impl PostgresBlogPostReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a BlogPostFilter) {
        let mut separator = " WHERE ";
        if let Some(status) = filter.effective_status() {
            builder.push(separator);
            builder.push("status = ");
            builder.push_bind(status.as_str());
            separator = " AND ";
        }
        if let Some(category) = filter.category.as_deref() {
            builder.push(separator);
            builder.push("category = ");
            builder.push_bind(category);
        }
        builder.push(match filter.order {
            BlogListOrder::Newest => " ORDER BY created_at DESC, id DESC",
            BlogListOrder::RecentlyPublished => {
                " ORDER BY published_at DESC NULLS LAST, created_at DESC, id DESC"
            }
        });
    }
}

#[async_trait]
impl BlogPostReadRepository for PostgresBlogPostReadRepository {
    async fn find_by_id(&self, id: BlogPostId) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn list(&self, filter: &BlogPostFilter) -> DomainResult<Vec<BlogPost>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM blog_posts");
        Self::apply_filter(&mut builder, filter);

        builder
            .build_query_as::<BlogPostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(BlogPost::try_from)
            .collect()
    }

    async fn count_published(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM blog_posts WHERE status = 'published'")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }
}
