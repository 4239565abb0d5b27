// src/presentation/http/controllers/dashboard.rs
use crate::application::dto::DashboardStatsDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    responses(
        (status = 200, description = "Dashboard counters.", body = DashboardStatsDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .dashboard_queries
        .stats(&user)
        .await
        .into_http()
        .map(Json)
}
