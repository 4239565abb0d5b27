// src/application/commands/blog/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::authors::AuthorDirectory,
    },
    domain::{
        blog::{BlogPost, BlogPostReadRepository, BlogPostWriteRepository},
        content::{PublishRequest, PublishState, Slug, SlugService},
    },
};

pub struct BlogCommandService {
    pub(super) write_repo: Arc<dyn BlogPostWriteRepository>,
    pub(super) read_repo: Arc<dyn BlogPostReadRepository>,
    pub(super) authors: AuthorDirectory,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        write_repo: Arc<dyn BlogPostWriteRepository>,
        read_repo: Arc<dyn BlogPostReadRepository>,
        authors: AuthorDirectory,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            authors,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_by_slug(&self, raw: &str) -> ApplicationResult<BlogPost> {
        let not_found = || ApplicationError::missing("blog post");
        let slug = Slug::new(raw).map_err(|_| not_found())?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)
    }

    /// Any write that moves the post through its lifecycle, re-stamps
    /// included, needs `blog:publish`.
    pub(super) fn ensure_can_transition(
        actor: &AuthenticatedUser,
        from: PublishState,
        to: PublishState,
    ) -> ApplicationResult<()> {
        if from == to {
            Ok(())
        } else {
            actor.require("blog", "publish")
        }
    }

    /// Lifecycle part of an edit. An actor without `blog:publish` may resubmit
    /// the post's current status as-is; it leaves the state untouched.
    pub(super) fn next_publish_state(
        actor: &AuthenticatedUser,
        current: PublishState,
        request: PublishRequest,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Option<PublishState>> {
        if request.is_empty() {
            return Ok(None);
        }
        let echoes_current =
            request.published_at.is_none() && request.status == Some(current.status);
        if echoes_current && !actor.has_capability("blog", "publish") {
            return Ok(None);
        }
        let next = current.apply(request, now)?;
        Self::ensure_can_transition(actor, current, next)?;
        Ok(Some(next))
    }
}
