// src/domain/content/publication.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    #[default]
    Draft,
    Published,
}

impl PublicationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(DomainError::Validation(format!(
                "unknown status '{other}', expected 'draft' or 'published'"
            ))),
        }
    }
}

/// What a single write asks of the lifecycle: an optional target status and an
/// optional explicit publish timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishRequest {
    pub status: Option<PublicationStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PublishRequest {
    pub const fn to(status: PublicationStatus) -> Self {
        Self {
            status: Some(status),
            published_at: None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.published_at.is_none()
    }
}

/// `status` plus the "last published at" marker of a blog post.
///
/// Stamping rule, shared by create, update and the status action: asking for
/// `published` without an explicit timestamp stamps `now`, even when the post
/// already carries one. Moving to `draft` never clears the marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishState {
    pub status: PublicationStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl PublishState {
    pub const fn draft() -> Self {
        Self {
            status: PublicationStatus::Draft,
            published_at: None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == PublicationStatus::Published
    }

    /// State of a record that does not exist yet.
    pub fn initial(request: PublishRequest, now: DateTime<Utc>) -> DomainResult<Self> {
        Self::draft().apply(request, now)
    }

    pub fn apply(self, request: PublishRequest, now: DateTime<Utc>) -> DomainResult<Self> {
        use PublicationStatus::{Draft, Published};

        match (request.status, request.published_at) {
            (Some(Published), explicit) => Ok(Self {
                status: Published,
                published_at: Some(explicit.unwrap_or(now)),
            }),
            (Some(Draft), None) => Ok(Self {
                status: Draft,
                ..self
            }),
            (Some(Draft), Some(_)) => Err(DomainError::Validation(
                "published_at cannot be set while moving a post to draft".into(),
            )),
            (None, Some(at)) if self.published_at.is_some() => Ok(Self {
                published_at: Some(at),
                ..self
            }),
            (None, Some(_)) => Err(DomainError::Validation(
                "published_at can only be set on a post that has been published".into(),
            )),
            (None, None) => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_posts_start_as_drafts() {
        let state = PublishState::initial(PublishRequest::default(), Utc::now()).unwrap();
        assert_eq!(state, PublishState::draft());
    }

    #[test]
    fn publishing_a_draft_stamps_now() {
        let now = Utc::now();
        let state = PublishState::draft()
            .apply(PublishRequest::to(PublicationStatus::Published), now)
            .unwrap();
        assert!(state.is_published());
        assert_eq!(state.published_at, Some(now));
    }

    #[test]
    fn republishing_restamps() {
        let first = Utc::now() - Duration::days(3);
        let now = Utc::now();
        let state = PublishState {
            status: PublicationStatus::Published,
            published_at: Some(first),
        }
        .apply(PublishRequest::to(PublicationStatus::Published), now)
        .unwrap();
        assert_eq!(state.published_at, Some(now));
    }

    #[test]
    fn explicit_timestamp_wins_over_now() {
        let backdated = Utc::now() - Duration::days(30);
        let state = PublishState::initial(
            PublishRequest {
                status: Some(PublicationStatus::Published),
                published_at: Some(backdated),
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(state.published_at, Some(backdated));
    }

    #[test]
    fn unpublishing_keeps_marker() {
        let stamped = Utc::now() - Duration::hours(1);
        let state = PublishState {
            status: PublicationStatus::Published,
            published_at: Some(stamped),
        }
        .apply(PublishRequest::to(PublicationStatus::Draft), Utc::now())
        .unwrap();
        assert_eq!(state.status, PublicationStatus::Draft);
        assert_eq!(state.published_at, Some(stamped));
    }

    #[test]
    fn timestamp_without_history_is_rejected() {
        let err = PublishState::draft()
            .apply(
                PublishRequest {
                    status: None,
                    published_at: Some(Utc::now()),
                },
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = PublishState::draft()
            .apply(
                PublishRequest {
                    status: Some(PublicationStatus::Draft),
                    published_at: Some(Utc::now()),
                },
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn status_parsing_is_strict() {
        assert_eq!(
            "published".parse::<PublicationStatus>().unwrap(),
            PublicationStatus::Published
        );
        assert!("archived".parse::<PublicationStatus>().is_err());
        assert!("Published".parse::<PublicationStatus>().is_err());
        assert!(serde_json::from_str::<PublicationStatus>("\"archived\"").is_err());
        assert_eq!(
            serde_json::to_string(&PublicationStatus::Draft).unwrap(),
            "\"draft\""
        );
    }
}
