// src/domain/showcase/entity.rs
use crate::domain::content::ids::record_id;
use crate::domain::content::{DisplayOrdered, OrderIndex};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

record_id!(ShowcaseAppId, "showcase app");

/// Direction the logo marquee row travels in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

impl ScrollDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for ScrollDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(DomainError::Validation(format!(
                "unknown scroll direction '{other}'"
            ))),
        }
    }
}

/// Seconds for one full marquee cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpeed(i32);

impl ScrollSpeed {
    pub const DEFAULT: i32 = 20;

    pub fn new(value: i32) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::Validation(
                "scroll_speed must be a positive number of seconds".into(),
            ));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone)]
pub struct ShowcaseApp {
    pub id: ShowcaseAppId,
    pub app_name: String,
    pub logo_url: String,
    pub app_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub scroll_direction: ScrollDirection,
    pub scroll_speed: ScrollSpeed,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayOrdered for ShowcaseApp {
    fn order_index(&self) -> OrderIndex {
        self.order_index
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn record_id(&self) -> i64 {
        self.id.into()
    }
}

#[derive(Debug, Clone)]
pub struct NewShowcaseApp {
    pub app_name: String,
    pub logo_url: String,
    pub app_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub scroll_direction: ScrollDirection,
    pub scroll_speed: ScrollSpeed,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ShowcaseAppUpdate {
    pub id: ShowcaseAppId,
    pub app_name: Option<String>,
    pub logo_url: Option<String>,
    pub app_url: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub scroll_direction: Option<ScrollDirection>,
    pub scroll_speed: Option<ScrollSpeed>,
    pub visible: Option<bool>,
    pub order_index: Option<OrderIndex>,
    pub updated_at: DateTime<Utc>,
}
