// src/presentation/http/controllers/footer_links.rs
use super::nullable;
use crate::application::{
    commands::footer_links::{CreateFooterLinkCommand, UpdateFooterLinkCommand},
    dto::FooterLinkDto,
};
use crate::domain::footer::{FooterCategory, SocialPlatform};
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
pub struct FooterLinkListParams {
    pub category: Option<FooterCategory>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFooterLinkRequest {
    pub title: String,
    pub url: String,
    pub category: Option<FooterCategory>,
    /// Required for `social` links, dropped otherwise.
    pub icon_name: Option<SocialPlatform>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFooterLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub category: Option<FooterCategory>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<SocialPlatform>)]
    pub icon_name: Option<Option<SocialPlatform>>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/footer-links",
    params(FooterLinkListParams),
    responses((status = 200, description = "Footer links in display order.", body = [FooterLinkDto])),
    tag = "Footer"
)]
pub async fn list_links(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<FooterLinkListParams>,
) -> HttpResult<Json<Vec<FooterLinkDto>>> {
    state
        .services
        .footer_link_queries
        .list_links(actor.0.as_ref(), params.category)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/footer-links/{id}",
    params(("id" = i64, Path, description = "Link id")),
    responses(
        (status = 200, description = "Footer link.", body = FooterLinkDto),
        (status = 404, description = "Unknown or hidden link.", body = ErrorResponse)
    ),
    tag = "Footer"
)]
pub async fn get_link(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<FooterLinkDto>> {
    state
        .services
        .footer_link_queries
        .get_link(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/footer-links",
    request_body = CreateFooterLinkRequest,
    responses(
        (status = 201, description = "Link created.", body = FooterLinkDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse)
    ),
    tag = "Footer"
)]
pub async fn create_link(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateFooterLinkRequest>,
) -> HttpResult<(StatusCode, Json<FooterLinkDto>)> {
    let command = CreateFooterLinkCommand {
        title: payload.title,
        url: payload.url,
        category: payload.category,
        icon_name: payload.icon_name,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .footer_link_commands
        .create_link(&user, command)
        .await
        .into_http()
        .map(|link| (StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    put,
    path = "/api/v1/footer-links/{id}",
    params(("id" = i64, Path, description = "Link id")),
    request_body = UpdateFooterLinkRequest,
    responses(
        (status = 200, description = "Link updated.", body = FooterLinkDto),
        (status = 404, description = "Unknown link.", body = ErrorResponse)
    ),
    tag = "Footer"
)]
pub async fn update_link(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFooterLinkRequest>,
) -> HttpResult<Json<FooterLinkDto>> {
    let command = UpdateFooterLinkCommand {
        id,
        title: payload.title,
        url: payload.url,
        category: payload.category,
        icon_name: payload.icon_name,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .footer_link_commands
        .update_link(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/footer-links/{id}",
    params(("id" = i64, Path, description = "Link id")),
    responses(
        (status = 200, description = "Link deleted.", body = StatusResponse),
        (status = 404, description = "Unknown link.", body = ErrorResponse)
    ),
    tag = "Footer"
)]
pub async fn delete_link(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .footer_link_commands
        .delete_link(&user, id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
