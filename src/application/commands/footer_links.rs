// src/application/commands/footer_links.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, FooterLinkDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{OrderIndex, text::required_text},
        footer::{
            FooterCategory, FooterLink, FooterLinkId, FooterLinkRepository, FooterLinkUpdate,
            NewFooterLink, SocialPlatform, entity::icon_for,
        },
    },
};

const RESOURCE: &str = "footer_links";

#[derive(Debug, Clone, Default)]
pub struct CreateFooterLinkCommand {
    pub title: String,
    pub url: String,
    pub category: Option<FooterCategory>,
    pub icon_name: Option<SocialPlatform>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFooterLinkCommand {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub category: Option<FooterCategory>,
    pub icon_name: Option<Option<SocialPlatform>>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

pub struct FooterLinkCommandService {
    repo: Arc<dyn FooterLinkRepository>,
    clock: Arc<dyn Clock>,
}

impl FooterLinkCommandService {
    pub fn new(repo: Arc<dyn FooterLinkRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_link(
        &self,
        actor: &AuthenticatedUser,
        command: CreateFooterLinkCommand,
    ) -> ApplicationResult<FooterLinkDto> {
        actor.require(RESOURCE, "create")?;

        let category = command.category.unwrap_or_default();
        let link = NewFooterLink {
            title: required_text("title", command.title)?,
            url: required_text("url", command.url)?,
            category,
            icon_name: icon_for(category, command.icon_name)?,
            visible: command.visible.unwrap_or(true),
            order_index: command.order_index.map(OrderIndex::new).unwrap_or_default(),
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(link).await?;
        tracing::info!(link_id = i64::from(created.id), actor = %actor.username, "footer link created");
        Ok(created.into())
    }

    pub async fn update_link(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateFooterLinkCommand,
    ) -> ApplicationResult<FooterLinkDto> {
        actor.require(RESOURCE, "update")?;
        let current = self.load(command.id).await?;

        // The icon rule is checked against the merged record, so a category
        // switch away from `social` drops the stored icon.
        let category = command.category.unwrap_or(current.category);
        let requested_icon = command.icon_name.unwrap_or(current.icon_name);
        let icon_name = icon_for(category, requested_icon)?;

        let update = FooterLinkUpdate {
            id: current.id,
            title: command
                .title
                .map(|v| required_text("title", v))
                .transpose()?,
            url: command.url.map(|v| required_text("url", v)).transpose()?,
            category: command.category,
            icon_name: (icon_name != current.icon_name).then_some(icon_name),
            visible: command.visible,
            order_index: command.order_index.map(OrderIndex::new),
            updated_at: self.clock.now(),
        };

        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_link(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        actor.require(RESOURCE, "delete")?;
        let link = self.load(id).await?;
        self.repo.delete(link.id).await?;
        tracing::info!(link_id = i64::from(link.id), actor = %actor.username, "footer link deleted");
        Ok(())
    }

    async fn load(&self, id: i64) -> ApplicationResult<FooterLink> {
        let id = FooterLinkId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing("footer link"))
    }
}
