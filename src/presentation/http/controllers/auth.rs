// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::LoginCommand,
    dto::{AdminUserDto, AuthTokenDto, UserProfileDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: AdminUserDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse),
        (status = 403, description = "Account disabled.", body = ErrorResponse),
        (status = 429, description = "Too many attempts.")
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .auth_commands
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "Session revoked.", body = StatusResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .auth_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("signed_out")))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current admin.", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .auth_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}
