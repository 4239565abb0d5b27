// src/application/dto/showcase.rs
use crate::domain::showcase::{ScrollDirection, ShowcaseApp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowcaseAppDto {
    pub id: i64,
    pub app_name: String,
    pub logo_url: String,
    pub app_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub scroll_direction: ScrollDirection,
    /// Seconds per marquee cycle.
    pub scroll_speed: i32,
    pub visible: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShowcaseApp> for ShowcaseAppDto {
    fn from(app: ShowcaseApp) -> Self {
        Self {
            id: app.id.into(),
            app_name: app.app_name,
            logo_url: app.logo_url,
            app_url: app.app_url,
            description: app.description,
            category: app.category,
            scroll_direction: app.scroll_direction,
            scroll_speed: app.scroll_speed.value(),
            visible: app.visible,
            order_index: app.order_index.into(),
            created_at: app.created_at,
            updated_at: app.updated_at,
        }
    }
}
