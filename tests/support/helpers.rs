// tests/support/helpers.rs
use std::{sync::Arc, time::Duration as StdDuration};

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use biscuit_auth::KeyPair;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::util::ServiceExt as _;

use showroom_cms::{
    application::{
        commands::auth::LoginCommand,
        services::{ApplicationServices, Repositories, SecurityPorts},
    },
    infrastructure::{
        security::{session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager},
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        routes::{RouterOptions, build_router},
        state::HttpState,
    },
};

use super::mocks::{InMemoryContent, InMemoryUserRepo, PlainPasswordHasher, TestClock};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// The full service graph over in-memory adapters. Tokens are real biscuits
/// signed with a throwaway key.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub content: InMemoryContent,
    pub users: InMemoryUserRepo,
    pub clock: TestClock,
}

impl TestApp {
    pub fn new() -> Self {
        let clock = TestClock::starting_at(fixed_now());
        let content = InMemoryContent::new();
        let users = InMemoryUserRepo::seeded(fixed_now());

        let repos = Repositories {
            users: Arc::new(users.clone()),
            blog_write: Arc::new(content.clone()),
            blog_read: Arc::new(content.clone()),
            team: Arc::new(content.clone()),
            text_testimonials: Arc::new(content.clone()),
            video_testimonials: Arc::new(content.clone()),
            footer_links: Arc::new(content.clone()),
            showcase: Arc::new(content.clone()),
            display: Arc::new(content.clone()),
        };

        let key = KeyPair::new().private().to_bytes_hex();
        let security = SecurityPorts {
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(
                BiscuitTokenManager::new(&key, StdDuration::from_secs(3600)).unwrap(),
            ),
            session_revocation_store: Arc::new(InMemorySessionRevocationStore::new()),
        };

        let services = Arc::new(ApplicationServices::new(
            repos,
            security,
            Arc::new(clock.clone()),
            Arc::new(DefaultSlugGenerator),
        ));

        Self {
            services,
            content,
            users,
            clock,
        }
    }

    pub fn router(&self) -> Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &RouterOptions::default(),
        )
    }

    /// Signs in through the service layer and returns the bearer token.
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        self.services
            .auth_commands
            .login(LoginCommand {
                username: username.into(),
                password: password.into(),
            })
            .await
            .expect("login")
            .token
            .token
    }
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an `ErrorResponse` with the expected status and reason.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> String {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = json_body(resp).await;
    assert_eq!(json["error"], expected_error, "unexpected error field in {json}");
    let message = json["message"].as_str().unwrap_or_default().to_string();
    assert!(!message.is_empty(), "expected a message in {json}");
    message
}
