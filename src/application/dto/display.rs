// src/application/dto/display.rs
use crate::domain::content::{Collection, DisplaySettings};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisplaySettingsDto {
    pub collection: Collection,
    pub id: i64,
    pub visible: bool,
    pub order_index: i32,
}

impl From<DisplaySettings> for DisplaySettingsDto {
    fn from(settings: DisplaySettings) -> Self {
        Self {
            collection: settings.collection,
            id: settings.id,
            visible: settings.visible,
            order_index: settings.order_index.into(),
        }
    }
}
