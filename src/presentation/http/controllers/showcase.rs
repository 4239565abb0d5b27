// src/presentation/http/controllers/showcase.rs
use super::nullable;
use crate::application::{
    commands::showcase::{CreateShowcaseAppCommand, UpdateShowcaseAppCommand},
    dto::ShowcaseAppDto,
};
use crate::domain::showcase::ScrollDirection;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShowcaseAppRequest {
    pub app_name: String,
    pub logo_url: String,
    pub app_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub scroll_direction: Option<ScrollDirection>,
    /// Seconds per marquee cycle; defaults to 20.
    pub scroll_speed: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShowcaseAppRequest {
    pub app_name: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub app_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    pub scroll_direction: Option<ScrollDirection>,
    pub scroll_speed: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/showcase",
    responses((status = 200, description = "Showcase apps in display order.", body = [ShowcaseAppDto])),
    tag = "Showcase"
)]
pub async fn list_apps(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<ShowcaseAppDto>>> {
    state
        .services
        .showcase_queries
        .list_apps(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/showcase/{id}",
    params(("id" = i64, Path, description = "App id")),
    responses(
        (status = 200, description = "Showcase app.", body = ShowcaseAppDto),
        (status = 404, description = "Unknown or hidden app.", body = ErrorResponse)
    ),
    tag = "Showcase"
)]
pub async fn get_app(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ShowcaseAppDto>> {
    state
        .services
        .showcase_queries
        .get_app(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/showcase",
    request_body = CreateShowcaseAppRequest,
    responses(
        (status = 201, description = "App created.", body = ShowcaseAppDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse)
    ),
    tag = "Showcase"
)]
pub async fn create_app(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateShowcaseAppRequest>,
) -> HttpResult<(StatusCode, Json<ShowcaseAppDto>)> {
    let command = CreateShowcaseAppCommand {
        app_name: payload.app_name,
        logo_url: payload.logo_url,
        app_url: payload.app_url,
        description: payload.description,
        category: payload.category,
        scroll_direction: payload.scroll_direction,
        scroll_speed: payload.scroll_speed,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .showcase_commands
        .create_app(&user, command)
        .await
        .into_http()
        .map(|app| (StatusCode::CREATED, Json(app)))
}

#[utoipa::path(
    put,
    path = "/api/v1/showcase/{id}",
    params(("id" = i64, Path, description = "App id")),
    request_body = UpdateShowcaseAppRequest,
    responses(
        (status = 200, description = "App updated.", body = ShowcaseAppDto),
        (status = 404, description = "Unknown app.", body = ErrorResponse)
    ),
    tag = "Showcase"
)]
pub async fn update_app(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateShowcaseAppRequest>,
) -> HttpResult<Json<ShowcaseAppDto>> {
    let command = UpdateShowcaseAppCommand {
        id,
        app_name: payload.app_name,
        logo_url: payload.logo_url,
        app_url: payload.app_url,
        description: payload.description,
        category: payload.category,
        scroll_direction: payload.scroll_direction,
        scroll_speed: payload.scroll_speed,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .showcase_commands
        .update_app(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/showcase/{id}",
    params(("id" = i64, Path, description = "App id")),
    responses(
        (status = 200, description = "App deleted.", body = StatusResponse),
        (status = 404, description = "Unknown app.", body = ErrorResponse)
    ),
    tag = "Showcase"
)]
pub async fn delete_app(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .showcase_commands
        .delete_app(&user, id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
