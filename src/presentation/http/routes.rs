// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, blog, dashboard, display, footer_links, showcase, team, testimonials},
    middleware::rate_limit::login_rate_limit,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Knobs the binary reads from configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Requires the server to be run with connect info so the client IP is known.
    pub rate_limit_login: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            rate_limit_login: false,
        }
    }
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(auth_routes(options.rate_limit_login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/admin/stats", get(dashboard::stats))
        .route(
            "/api/v1/blog",
            get(blog::list_posts).post(blog::create_post),
        )
        .route(
            "/api/v1/blog/{slug}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/api/v1/blog/{slug}/status", post(blog::set_status))
        .route(
            "/api/v1/team",
            get(team::list_members).post(team::create_member),
        )
        .route(
            "/api/v1/team/by-slug/{slug}",
            get(team::get_member_by_slug),
        )
        .route(
            "/api/v1/team/{id}",
            get(team::get_member)
                .put(team::update_member)
                .delete(team::delete_member),
        )
        .route(
            "/api/v1/testimonials/text",
            get(testimonials::list_text).post(testimonials::create_text),
        )
        .route(
            "/api/v1/testimonials/text/{id}",
            get(testimonials::get_text)
                .put(testimonials::update_text)
                .delete(testimonials::delete_text),
        )
        .route(
            "/api/v1/testimonials/video",
            get(testimonials::list_video).post(testimonials::create_video),
        )
        .route(
            "/api/v1/testimonials/video/{id}",
            get(testimonials::get_video)
                .put(testimonials::update_video)
                .delete(testimonials::delete_video),
        )
        .route(
            "/api/v1/footer-links",
            get(footer_links::list_links).post(footer_links::create_link),
        )
        .route(
            "/api/v1/footer-links/{id}",
            get(footer_links::get_link)
                .put(footer_links::update_link)
                .delete(footer_links::delete_link),
        )
        .route(
            "/api/v1/showcase",
            get(showcase::list_apps).post(showcase::create_app),
        )
        .route(
            "/api/v1/showcase/{id}",
            get(showcase::get_app)
                .put(showcase::update_app)
                .delete(showcase::delete_app),
        )
        .route(
            "/api/v1/{collection}/{id}/visibility",
            patch(display::set_visibility),
        )
        .route("/api/v1/{collection}/{id}/order", patch(display::set_order))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn auth_routes(rate_limited: bool) -> Router {
    let login = Router::new().route("/api/v1/auth/login", post(auth::login));
    if !rate_limited {
        return login;
    }
    match login_rate_limit(2, 5) {
        Some(layer) => login.layer(layer),
        None => {
            tracing::warn!("login rate limit rejected by governor; serving unlimited");
            login
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::new("ok"))
}
