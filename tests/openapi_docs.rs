// tests/openapi_docs.rs
use axum::http::{Method, StatusCode};
use showroom_cms::presentation::http::openapi::ApiDoc;
use utoipa::OpenApi;

mod support;

use support::{TestApp, json_body, json_request, send};

#[test]
fn document_lists_every_resource() {
    let doc = ApiDoc::openapi();
    for path in [
        "/health",
        "/api/v1/auth/login",
        "/api/v1/auth/logout",
        "/api/v1/auth/me",
        "/api/v1/admin/stats",
        "/api/v1/blog",
        "/api/v1/blog/{slug}",
        "/api/v1/blog/{slug}/status",
        "/api/v1/team",
        "/api/v1/team/{id}",
        "/api/v1/team/by-slug/{slug}",
        "/api/v1/testimonials/text",
        "/api/v1/testimonials/video/{id}",
        "/api/v1/footer-links",
        "/api/v1/showcase/{id}",
        "/api/v1/{collection}/{id}/visibility",
        "/api/v1/{collection}/{id}/order",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    let components = doc.components.expect("components");
    assert!(components.security_schemes.contains_key("bearerAuth"));
    for schema in ["BlogPostDto", "TeamMemberDto", "ErrorResponse", "Collection"] {
        assert!(components.schemas.contains_key(schema), "missing schema {schema}");
    }
}

#[tokio::test]
async fn document_and_health_are_served() {
    let app = TestApp::new();
    let router = app.router();

    let resp = send(&router, json_request(Method::GET, "/openapi.json", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = json_body(resp).await;
    assert!(doc["paths"]["/api/v1/blog"].is_object());

    let resp = send(&router, json_request(Method::GET, "/health", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");
}
