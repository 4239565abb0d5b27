// src/application/commands/display.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, DisplaySettingsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{Collection, DisplaySettingsRepository, OrderIndex},
};

#[derive(Debug, Clone, Copy)]
pub struct SetVisibilityCommand {
    pub collection: Collection,
    pub id: i64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SetOrderIndexCommand {
    pub collection: Collection,
    pub id: i64,
    pub order_index: i32,
}

/// Show/hide toggle and manual position shared by every ordered collection.
/// Neither write touches siblings or `updated_at`.
pub struct DisplayCommandService {
    repo: Arc<dyn DisplaySettingsRepository>,
}

impl DisplayCommandService {
    pub fn new(repo: Arc<dyn DisplaySettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn set_visibility(
        &self,
        actor: &AuthenticatedUser,
        command: SetVisibilityCommand,
    ) -> ApplicationResult<DisplaySettingsDto> {
        actor.require(command.collection.resource(), "update")?;
        let id = positive_id(command.collection, command.id)?;
        let settings = self
            .repo
            .set_visibility(command.collection, id, command.visible)
            .await?;
        tracing::info!(
            collection = %command.collection,
            id,
            visible = command.visible,
            "visibility changed"
        );
        Ok(settings.into())
    }

    pub async fn set_order_index(
        &self,
        actor: &AuthenticatedUser,
        command: SetOrderIndexCommand,
    ) -> ApplicationResult<DisplaySettingsDto> {
        actor.require(command.collection.resource(), "update")?;
        let id = positive_id(command.collection, command.id)?;
        let settings = self
            .repo
            .set_order_index(command.collection, id, OrderIndex::new(command.order_index))
            .await?;
        tracing::info!(
            collection = %command.collection,
            id,
            order_index = command.order_index,
            "order changed"
        );
        Ok(settings.into())
    }
}

fn positive_id(collection: Collection, id: i64) -> ApplicationResult<i64> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ApplicationError::validation(format!(
            "{} id must be positive",
            collection.label()
        )))
    }
}
