// src/application/commands/showcase.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ShowcaseAppDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{
            OrderIndex,
            text::{optional_text, required_text},
        },
        showcase::{
            NewShowcaseApp, ScrollDirection, ScrollSpeed, ShowcaseAppId, ShowcaseAppRepository,
            ShowcaseAppUpdate,
        },
    },
};

const RESOURCE: &str = "showcase";

#[derive(Debug, Clone, Default)]
pub struct CreateShowcaseAppCommand {
    pub app_name: String,
    pub logo_url: String,
    pub app_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub scroll_direction: Option<ScrollDirection>,
    pub scroll_speed: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateShowcaseAppCommand {
    pub id: i64,
    pub app_name: Option<String>,
    pub logo_url: Option<String>,
    pub app_url: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub scroll_direction: Option<ScrollDirection>,
    pub scroll_speed: Option<i32>,
    pub visible: Option<bool>,
    pub order_index: Option<i32>,
}

pub struct ShowcaseCommandService {
    repo: Arc<dyn ShowcaseAppRepository>,
    clock: Arc<dyn Clock>,
}

impl ShowcaseCommandService {
    pub fn new(repo: Arc<dyn ShowcaseAppRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_app(
        &self,
        actor: &AuthenticatedUser,
        command: CreateShowcaseAppCommand,
    ) -> ApplicationResult<ShowcaseAppDto> {
        actor.require(RESOURCE, "create")?;

        let app = NewShowcaseApp {
            app_name: required_text("app_name", command.app_name)?,
            logo_url: required_text("logo_url", command.logo_url)?,
            app_url: optional_text(command.app_url),
            description: optional_text(command.description),
            category: optional_text(command.category),
            scroll_direction: command.scroll_direction.unwrap_or_default(),
            scroll_speed: command
                .scroll_speed
                .map(ScrollSpeed::new)
                .transpose()?
                .unwrap_or_default(),
            visible: command.visible.unwrap_or(true),
            order_index: command.order_index.map(OrderIndex::new).unwrap_or_default(),
            created_at: self.clock.now(),
        };

        let created = self.repo.insert(app).await?;
        tracing::info!(app_id = i64::from(created.id), actor = %actor.username, "showcase app created");
        Ok(created.into())
    }

    pub async fn update_app(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateShowcaseAppCommand,
    ) -> ApplicationResult<ShowcaseAppDto> {
        actor.require(RESOURCE, "update")?;
        let id = self.existing(command.id).await?;

        let update = ShowcaseAppUpdate {
            id,
            app_name: command
                .app_name
                .map(|v| required_text("app_name", v))
                .transpose()?,
            logo_url: command
                .logo_url
                .map(|v| required_text("logo_url", v))
                .transpose()?,
            app_url: command.app_url.map(optional_text),
            description: command.description.map(optional_text),
            category: command.category.map(optional_text),
            scroll_direction: command.scroll_direction,
            scroll_speed: command.scroll_speed.map(ScrollSpeed::new).transpose()?,
            visible: command.visible,
            order_index: command.order_index.map(OrderIndex::new),
            updated_at: self.clock.now(),
        };

        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_app(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        actor.require(RESOURCE, "delete")?;
        let id = self.existing(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(app_id = i64::from(id), actor = %actor.username, "showcase app deleted");
        Ok(())
    }

    async fn existing(&self, id: i64) -> ApplicationResult<ShowcaseAppId> {
        let id = ShowcaseAppId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(|app| app.id)
            .ok_or_else(|| ApplicationError::missing("showcase app"))
    }
}
