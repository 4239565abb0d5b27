// src/domain/content/display.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// New records sort after everything that has been positioned by hand.
pub const DEFAULT_ORDER_INDEX: i32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderIndex(i32);

impl OrderIndex {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for OrderIndex {
    fn default() -> Self {
        Self(DEFAULT_ORDER_INDEX)
    }
}

impl From<OrderIndex> for i32 {
    fn from(value: OrderIndex) -> Self {
        value.0
    }
}

/// Collections that carry `visible` and `order_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    TeamMembers,
    TextTestimonials,
    VideoTestimonials,
    FooterLinks,
    ShowcaseApps,
}

impl Collection {
    pub const fn table(self) -> &'static str {
        match self {
            Self::TeamMembers => "team_members",
            Self::TextTestimonials => "testimonials_text",
            Self::VideoTestimonials => "testimonials_video",
            Self::FooterLinks => "footer_links",
            Self::ShowcaseApps => "showcase_apps",
        }
    }

    /// Capability resource guarding writes to this collection.
    pub const fn resource(self) -> &'static str {
        match self {
            Self::TeamMembers => "team",
            Self::TextTestimonials | Self::VideoTestimonials => "testimonials",
            Self::FooterLinks => "footer_links",
            Self::ShowcaseApps => "showcase",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TeamMembers => "team member",
            Self::TextTestimonials => "text testimonial",
            Self::VideoTestimonials => "video testimonial",
            Self::FooterLinks => "footer link",
            Self::ShowcaseApps => "showcase app",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub collection: Collection,
    pub id: i64,
    pub visible: bool,
    pub order_index: OrderIndex,
}

/// Single-column writes shared by every ordered collection. Neither call
/// touches any other column, `updated_at` included.
#[async_trait]
pub trait DisplaySettingsRepository: Send + Sync {
    async fn set_visibility(
        &self,
        collection: Collection,
        id: i64,
        visible: bool,
    ) -> DomainResult<DisplaySettings>;

    async fn set_order_index(
        &self,
        collection: Collection,
        id: i64,
        order_index: OrderIndex,
    ) -> DomainResult<DisplaySettings>;
}

pub trait DisplayOrdered {
    fn order_index(&self) -> OrderIndex;
    fn created_at(&self) -> DateTime<Utc>;
    fn record_id(&self) -> i64;
}

/// Ascending `order_index`; equal indexes keep creation order.
pub fn sort_for_display<T: DisplayOrdered>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.order_index()
            .cmp(&b.order_index())
            .then_with(|| a.created_at().cmp(&b.created_at()))
            .then_with(|| a.record_id().cmp(&b.record_id()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct Row(i64, i32, DateTime<Utc>);

    impl DisplayOrdered for Row {
        fn order_index(&self) -> OrderIndex {
            OrderIndex::new(self.1)
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.2
        }
        fn record_id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn ties_fall_back_to_creation_order() {
        let t0 = Utc::now();
        let mut rows = vec![
            Row(3, 999, t0 + Duration::seconds(2)),
            Row(1, 999, t0),
            Row(4, 1, t0 + Duration::seconds(5)),
            Row(2, 999, t0 + Duration::seconds(1)),
        ];
        sort_for_display(&mut rows);
        let ids: Vec<i64> = rows.iter().map(|r| r.0).collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn default_order_index_is_sentinel() {
        assert_eq!(OrderIndex::default().value(), DEFAULT_ORDER_INDEX);
    }
}
