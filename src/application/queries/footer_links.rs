// src/application/queries/footer_links.rs
use std::sync::Arc;

use super::sees_hidden;
use crate::{
    application::{
        dto::{AuthenticatedUser, FooterLinkDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::sort_for_display,
        footer::{FooterCategory, FooterLinkId, FooterLinkRepository},
    },
};

const RESOURCE: &str = "footer_links";

pub struct FooterLinkQueryService {
    repo: Arc<dyn FooterLinkRepository>,
}

impl FooterLinkQueryService {
    pub fn new(repo: Arc<dyn FooterLinkRepository>) -> Self {
        Self { repo }
    }

    /// Display order; `category` narrows to one footer column.
    pub async fn list_links(
        &self,
        actor: Option<&AuthenticatedUser>,
        category: Option<FooterCategory>,
    ) -> ApplicationResult<Vec<FooterLinkDto>> {
        let mut links = self.repo.list(sees_hidden(actor, RESOURCE)).await?;
        links.retain(|l| category.is_none_or(|c| l.category == c));
        sort_for_display(&mut links);
        Ok(links.into_iter().map(Into::into).collect())
    }

    pub async fn get_link(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<FooterLinkDto> {
        let id = FooterLinkId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .filter(|l| l.visible || sees_hidden(actor, RESOURCE))
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("footer link"))
    }
}
