// src/presentation/http/controllers/team.rs
use super::nullable;
use crate::application::{
    commands::team::{CreateTeamMemberCommand, DeleteTeamMemberCommand, UpdateTeamMemberCommand},
    dto::TeamMemberDto,
    queries::team::ListTeamMembersQuery,
};
use crate::domain::team::SocialLinks;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TeamListParams {
    #[serde(default)]
    pub featured: bool,
    pub department: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeamMemberRequest {
    pub full_name: String,
    /// Derived from `full_name` when omitted or blank.
    pub slug: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub short_bio: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub is_featured: Option<bool>,
    pub social_links: Option<SocialLinks>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTeamMemberRequest {
    pub full_name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub job_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub short_bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub photo_url: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub social_links: Option<SocialLinks>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/team",
    params(TeamListParams),
    responses((status = 200, description = "Team in display order.", body = [TeamMemberDto])),
    tag = "Team"
)]
pub async fn list_members(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<TeamListParams>,
) -> HttpResult<Json<Vec<TeamMemberDto>>> {
    state
        .services
        .team_queries
        .list_members(
            actor.0.as_ref(),
            ListTeamMembersQuery {
                featured_only: params.featured,
                department: params.department,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/team/by-slug/{slug}",
    params(("slug" = String, Path, description = "Member slug")),
    responses(
        (status = 200, description = "Public profile.", body = TeamMemberDto),
        (status = 404, description = "Unknown or hidden member.", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn get_member_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<TeamMemberDto>> {
    state
        .services
        .team_queries
        .get_member_by_slug(actor.0.as_ref(), slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/team/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Team member.", body = TeamMemberDto),
        (status = 404, description = "Unknown or hidden member.", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn get_member(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<TeamMemberDto>> {
    state
        .services
        .team_queries
        .get_member(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/team",
    request_body = CreateTeamMemberRequest,
    responses(
        (status = 201, description = "Member created.", body = TeamMemberDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn create_member(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTeamMemberRequest>,
) -> HttpResult<(StatusCode, Json<TeamMemberDto>)> {
    let command = CreateTeamMemberCommand {
        full_name: payload.full_name,
        slug: payload.slug,
        job_title: payload.job_title,
        department: payload.department,
        short_bio: payload.short_bio,
        bio: payload.bio,
        location: payload.location,
        email: payload.email,
        phone: payload.phone,
        photo_url: payload.photo_url,
        is_featured: payload.is_featured,
        social_links: payload.social_links,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .team_commands
        .create_member(&user, command)
        .await
        .into_http()
        .map(|member| (StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    put,
    path = "/api/v1/team/{id}",
    params(("id" = i64, Path, description = "Member id")),
    request_body = UpdateTeamMemberRequest,
    responses(
        (status = 200, description = "Member updated.", body = TeamMemberDto),
        (status = 404, description = "Unknown member.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn update_member(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTeamMemberRequest>,
) -> HttpResult<Json<TeamMemberDto>> {
    let command = UpdateTeamMemberCommand {
        id,
        full_name: payload.full_name,
        slug: payload.slug,
        job_title: payload.job_title,
        department: payload.department,
        short_bio: payload.short_bio,
        bio: payload.bio,
        location: payload.location,
        email: payload.email,
        phone: payload.phone,
        photo_url: payload.photo_url,
        is_featured: payload.is_featured,
        social_links: payload.social_links,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .team_commands
        .update_member(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/team/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member deleted; authored posts lose their author.", body = StatusResponse),
        (status = 404, description = "Unknown member.", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn delete_member(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .team_commands
        .delete_member(&user, DeleteTeamMemberCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
