// src/application/queries/blog/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::AuthenticatedUser, services::authors::AuthorDirectory},
    domain::blog::BlogPostReadRepository,
};

pub struct BlogQueryService {
    pub(super) read_repo: Arc<dyn BlogPostReadRepository>,
    pub(super) authors: AuthorDirectory,
}

impl BlogQueryService {
    pub fn new(read_repo: Arc<dyn BlogPostReadRepository>, authors: AuthorDirectory) -> Self {
        Self { read_repo, authors }
    }

    pub(super) fn sees_drafts(actor: Option<&AuthenticatedUser>) -> bool {
        actor.is_some_and(|a| a.has_capability("blog", "view:drafts"))
    }
}
