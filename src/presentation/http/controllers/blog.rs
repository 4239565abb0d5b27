// src/presentation/http/controllers/blog.rs
use super::nullable;
use crate::application::{
    commands::blog::{
        CreateBlogPostCommand, DeleteBlogPostCommand, SetBlogStatusCommand, UpdateBlogPostCommand,
    },
    dto::BlogPostDto,
    queries::blog::{GetBlogPostBySlugQuery, ListBlogPostsQuery},
};
use crate::domain::{blog::BlogListOrder, content::PublicationStatus};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlogSort {
    /// Newest first by creation time.
    #[default]
    Newest,
    /// Most recently published first.
    Published,
}

impl From<BlogSort> for BlogListOrder {
    fn from(value: BlogSort) -> Self {
        match value {
            BlogSort::Newest => Self::Newest,
            BlogSort::Published => Self::RecentlyPublished,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BlogListParams {
    /// Honoured only for callers who can see drafts.
    pub status: Option<PublicationStatus>,
    pub category: Option<String>,
    #[serde(default)]
    pub sort: BlogSort,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogPostRequest {
    pub title: String,
    /// Derived from `title` when omitted or blank.
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

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    /// Renaming never changes the slug; send one to change it.
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub meta_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub meta_description: Option<Option<String>>,
    pub status: Option<PublicationStatus>,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub author_id: Option<Option<i64>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetBlogStatusRequest {
    pub status: PublicationStatus,
    /// Defaults to now when publishing.
    pub published_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/blog",
    params(BlogListParams),
    responses(
        (status = 200, description = "Blog posts, newest first.", body = [BlogPostDto])
    ),
    tag = "Blog"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<Vec<BlogPostDto>>> {
    state
        .services
        .blog_queries
        .list_posts(
            actor.0.as_ref(),
            ListBlogPostsQuery {
                status: params.status,
                category: params.category,
                order: params.sort.into(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Blog post.", body = BlogPostDto),
        (status = 404, description = "Unknown slug or unpublished post.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<BlogPostDto>> {
    state
        .services
        .blog_queries
        .get_by_slug(actor.0.as_ref(), GetBlogPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Post created.", body = BlogPostDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 403, description = "Missing capability.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateBlogPostRequest>,
) -> HttpResult<(StatusCode, Json<BlogPostDto>)> {
    let command = CreateBlogPostCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        category: payload.category,
        featured_image: payload.featured_image,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        status: payload.status,
        published_at: payload.published_at,
        author_id: payload.author_id,
    };

    state
        .services
        .blog_commands
        .create_post(&user, command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/blog/{slug}",
    params(("slug" = String, Path, description = "Current post slug")),
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Post updated.", body = BlogPostDto),
        (status = 404, description = "Unknown slug.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> HttpResult<Json<BlogPostDto>> {
    let command = UpdateBlogPostCommand {
        slug,
        title: payload.title,
        new_slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        category: payload.category,
        featured_image: payload.featured_image,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        status: payload.status,
        published_at: payload.published_at,
        author_id: payload.author_id,
    };

    state
        .services
        .blog_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/blog/{slug}/status",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = SetBlogStatusRequest,
    responses(
        (status = 200, description = "Status changed.", body = BlogPostDto),
        (status = 403, description = "Missing blog:publish.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn set_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<SetBlogStatusRequest>,
) -> HttpResult<Json<BlogPostDto>> {
    let command = SetBlogStatusCommand {
        slug,
        status: payload.status,
        published_at: payload.published_at,
    };

    state
        .services
        .blog_commands
        .set_status(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/blog/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 403, description = "Missing capability.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .blog_commands
        .delete_post(&user, DeleteBlogPostCommand { slug })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
