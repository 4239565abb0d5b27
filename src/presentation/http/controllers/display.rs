// src/presentation/http/controllers/display.rs
use crate::application::{
    commands::display::{SetOrderIndexCommand, SetVisibilityCommand},
    dto::DisplaySettingsDto,
};
use crate::domain::content::Collection;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    pub order_index: i32,
}

#[utoipa::path(
    patch,
    path = "/api/v1/{collection}/{id}/visibility",
    params(
        ("collection" = Collection, Path, description = "Ordered collection"),
        ("id" = i64, Path, description = "Record id")
    ),
    request_body = VisibilityRequest,
    responses(
        (status = 200, description = "Visibility written.", body = DisplaySettingsDto),
        (status = 403, description = "Missing update capability.", body = ErrorResponse),
        (status = 404, description = "Unknown record.", body = ErrorResponse)
    ),
    tag = "Display"
)]
pub async fn set_visibility(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id)): Path<(Collection, i64)>,
    Json(payload): Json<VisibilityRequest>,
) -> HttpResult<Json<DisplaySettingsDto>> {
    state
        .services
        .display_commands
        .set_visibility(
            &user,
            SetVisibilityCommand {
                collection,
                id,
                visible: payload.visible,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/{collection}/{id}/order",
    params(
        ("collection" = Collection, Path, description = "Ordered collection"),
        ("id" = i64, Path, description = "Record id")
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order index written; siblings untouched.", body = DisplaySettingsDto),
        (status = 403, description = "Missing update capability.", body = ErrorResponse),
        (status = 404, description = "Unknown record.", body = ErrorResponse)
    ),
    tag = "Display"
)]
pub async fn set_order(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id)): Path<(Collection, i64)>,
    Json(payload): Json<OrderRequest>,
) -> HttpResult<Json<DisplaySettingsDto>> {
    state
        .services
        .display_commands
        .set_order_index(
            &user,
            SetOrderIndexCommand {
                collection,
                id,
                order_index: payload.order_index,
            },
        )
        .await
        .into_http()
        .map(Json)
}
