// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{
    auth, blog, dashboard, display, footer_links, showcase, team, testimonials,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        auth::login,
        auth::logout,
        auth::profile,
        dashboard::stats,
        blog::list_posts,
        blog::get_post,
        blog::create_post,
        blog::update_post,
        blog::set_status,
        blog::delete_post,
        team::list_members,
        team::get_member_by_slug,
        team::get_member,
        team::create_member,
        team::update_member,
        team::delete_member,
        testimonials::list_text,
        testimonials::get_text,
        testimonials::create_text,
        testimonials::update_text,
        testimonials::delete_text,
        testimonials::list_video,
        testimonials::get_video,
        testimonials::create_video,
        testimonials::update_video,
        testimonials::delete_video,
        footer_links::list_links,
        footer_links::get_link,
        footer_links::create_link,
        footer_links::update_link,
        footer_links::delete_link,
        showcase::list_apps,
        showcase::get_app,
        showcase::create_app,
        showcase::update_app,
        showcase::delete_app,
        display::set_visibility,
        display::set_order
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            blog::BlogSort,
            blog::CreateBlogPostRequest,
            blog::UpdateBlogPostRequest,
            blog::SetBlogStatusRequest,
            team::CreateTeamMemberRequest,
            team::UpdateTeamMemberRequest,
            testimonials::CreateTextTestimonialRequest,
            testimonials::UpdateTextTestimonialRequest,
            testimonials::CreateVideoTestimonialRequest,
            testimonials::UpdateVideoTestimonialRequest,
            footer_links::CreateFooterLinkRequest,
            footer_links::UpdateFooterLinkRequest,
            showcase::CreateShowcaseAppRequest,
            showcase::UpdateShowcaseAppRequest,
            display::VisibilityRequest,
            display::OrderRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::AdminUserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::BlogPostDto,
            crate::application::dto::AuthorSummaryDto,
            crate::application::dto::TeamMemberDto,
            crate::application::dto::TextTestimonialDto,
            crate::application::dto::VideoTestimonialDto,
            crate::application::dto::FooterLinkDto,
            crate::application::dto::ShowcaseAppDto,
            crate::application::dto::DisplaySettingsDto,
            crate::application::dto::DashboardStatsDto,
            crate::domain::content::PublicationStatus,
            crate::domain::content::Collection,
            crate::domain::team::SocialLinks,
            crate::domain::footer::FooterCategory,
            crate::domain::footer::SocialPlatform,
            crate::domain::showcase::ScrollDirection,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Admin sign-in and session endpoints"),
        (name = "Admin", description = "Back-office dashboard"),
        (name = "Blog", description = "Blog posts and their publication state"),
        (name = "Team", description = "Team member profiles"),
        (name = "Testimonials", description = "Text and video testimonials"),
        (name = "Footer", description = "Site footer links"),
        (name = "Showcase", description = "App showcase marquee"),
        (name = "Display", description = "Visibility and ordering shared by ordered collections"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Showroom CMS API",
        description = "Back-office API for the marketing site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let mut urls: Vec<String> = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(|segment| segment.trim().trim_end_matches('/').to_string())
                    .filter(|segment| !segment.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }
        urls.dedup();

        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default `docs/openapi.json`)
/// and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}
