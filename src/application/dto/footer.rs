// src/application/dto/footer.rs
use crate::domain::footer::{FooterCategory, FooterLink, SocialPlatform};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FooterLinkDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub category: FooterCategory,
    pub icon_name: Option<SocialPlatform>,
    pub visible: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FooterLink> for FooterLinkDto {
    fn from(link: FooterLink) -> Self {
        Self {
            id: link.id.into(),
            title: link.title,
            url: link.url,
            category: link.category,
            icon_name: link.icon_name,
            visible: link.visible,
            order_index: link.order_index.into(),
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
