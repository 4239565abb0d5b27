// src/presentation/http/controllers/testimonials.rs
use super::nullable;
use crate::application::{
    commands::testimonials::{
        CreateTextTestimonialCommand, CreateVideoTestimonialCommand, UpdateTextTestimonialCommand,
        UpdateVideoTestimonialCommand,
    },
    dto::{TextTestimonialDto, VideoTestimonialDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTextTestimonialRequest {
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_position: Option<String>,
    pub testimonial_text: String,
    /// 1 to 5; defaults to 5.
    pub rating: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTextTestimonialRequest {
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub client_company: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub client_position: Option<Option<String>>,
    pub testimonial_text: Option<String>,
    pub rating: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVideoTestimonialRequest {
    pub client_name: String,
    pub client_company: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVideoTestimonialRequest {
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub client_company: Option<Option<String>>,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub thumbnail_url: Option<Option<String>>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/testimonials/text",
    responses((status = 200, description = "Text testimonials in display order.", body = [TextTestimonialDto])),
    tag = "Testimonials"
)]
pub async fn list_text(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<TextTestimonialDto>>> {
    state
        .services
        .testimonial_queries
        .list_text(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/testimonials/text/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Text testimonial.", body = TextTestimonialDto),
        (status = 404, description = "Unknown or hidden testimonial.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn get_text(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<TextTestimonialDto>> {
    state
        .services
        .testimonial_queries
        .get_text(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/testimonials/text",
    request_body = CreateTextTestimonialRequest,
    responses(
        (status = 201, description = "Testimonial created.", body = TextTestimonialDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn create_text(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTextTestimonialRequest>,
) -> HttpResult<(StatusCode, Json<TextTestimonialDto>)> {
    let command = CreateTextTestimonialCommand {
        client_name: payload.client_name,
        client_company: payload.client_company,
        client_position: payload.client_position,
        testimonial_text: payload.testimonial_text,
        rating: payload.rating,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .testimonial_commands
        .create_text(&user, command)
        .await
        .into_http()
        .map(|t| (StatusCode::CREATED, Json(t)))
}

#[utoipa::path(
    put,
    path = "/api/v1/testimonials/text/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    request_body = UpdateTextTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial updated.", body = TextTestimonialDto),
        (status = 404, description = "Unknown testimonial.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn update_text(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTextTestimonialRequest>,
) -> HttpResult<Json<TextTestimonialDto>> {
    let command = UpdateTextTestimonialCommand {
        id,
        client_name: payload.client_name,
        client_company: payload.client_company,
        client_position: payload.client_position,
        testimonial_text: payload.testimonial_text,
        rating: payload.rating,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .testimonial_commands
        .update_text(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/testimonials/text/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial deleted.", body = StatusResponse),
        (status = 404, description = "Unknown testimonial.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn delete_text(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .testimonial_commands
        .delete_text(&user, id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

#[utoipa::path(
    get,
    path = "/api/v1/testimonials/video",
    responses((status = 200, description = "Video testimonials in display order.", body = [VideoTestimonialDto])),
    tag = "Testimonials"
)]
pub async fn list_video(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<VideoTestimonialDto>>> {
    state
        .services
        .testimonial_queries
        .list_video(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/testimonials/video/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Video testimonial.", body = VideoTestimonialDto),
        (status = 404, description = "Unknown or hidden testimonial.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn get_video(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<VideoTestimonialDto>> {
    state
        .services
        .testimonial_queries
        .get_video(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/testimonials/video",
    request_body = CreateVideoTestimonialRequest,
    responses(
        (status = 201, description = "Testimonial created.", body = VideoTestimonialDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn create_video(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateVideoTestimonialRequest>,
) -> HttpResult<(StatusCode, Json<VideoTestimonialDto>)> {
    let command = CreateVideoTestimonialCommand {
        client_name: payload.client_name,
        client_company: payload.client_company,
        video_url: payload.video_url,
        thumbnail_url: payload.thumbnail_url,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .testimonial_commands
        .create_video(&user, command)
        .await
        .into_http()
        .map(|t| (StatusCode::CREATED, Json(t)))
}

#[utoipa::path(
    put,
    path = "/api/v1/testimonials/video/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    request_body = UpdateVideoTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial updated.", body = VideoTestimonialDto),
        (status = 404, description = "Unknown testimonial.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn update_video(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVideoTestimonialRequest>,
) -> HttpResult<Json<VideoTestimonialDto>> {
    let command = UpdateVideoTestimonialCommand {
        id,
        client_name: payload.client_name,
        client_company: payload.client_company,
        video_url: payload.video_url,
        thumbnail_url: payload.thumbnail_url,
        visible: payload.visible,
        order_index: payload.order_index,
    };

    state
        .services
        .testimonial_commands
        .update_video(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/testimonials/video/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial deleted.", body = StatusResponse),
        (status = 404, description = "Unknown testimonial.", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn delete_video(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .testimonial_commands
        .delete_video(&user, id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
