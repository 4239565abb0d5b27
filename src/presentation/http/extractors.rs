// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Requires a valid, unrevoked bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Anonymous callers pass through; a token that is present must still be valid.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(app_state)| app_state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

async fn resolve(
    app_state: &HttpState,
    header: &Authorization<Bearer>,
) -> Result<AuthenticatedUser, HttpError> {
    app_state
        .services
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        resolve(&app_state, &header).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => resolve(&app_state, &header).await.map(|u| Self(Some(u))),
            None => Ok(Self(None)),
        }
    }
}
