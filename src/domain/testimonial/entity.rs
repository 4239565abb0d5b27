// src/domain/testimonial/entity.rs
use crate::domain::content::ids::record_id;
use crate::domain::content::{DisplayOrdered, OrderIndex};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

record_id!(TextTestimonialId, "text testimonial");
record_id!(VideoTestimonialId, "video testimonial");

/// Star rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: i32) -> DomainResult<Self> {
        match u8::try_from(value) {
            Ok(v) if (1..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(DomainError::Validation(format!(
                "rating must be between 1 and {}, got {value}",
                Self::MAX
            ))),
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        Self::from(value.0)
    }
}

#[derive(Debug, Clone)]
pub struct TextTestimonial {
    pub id: TextTestimonialId,
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_position: Option<String>,
    pub testimonial_text: String,
    pub rating: Rating,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayOrdered for TextTestimonial {
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
pub struct NewTextTestimonial {
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_position: Option<String>,
    pub testimonial_text: String,
    pub rating: Rating,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TextTestimonialUpdate {
    pub id: TextTestimonialId,
    pub client_name: Option<String>,
    pub client_company: Option<Option<String>>,
    pub client_position: Option<Option<String>>,
    pub testimonial_text: Option<String>,
    pub rating: Option<Rating>,
    pub visible: Option<bool>,
    pub order_index: Option<OrderIndex>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VideoTestimonial {
    pub id: VideoTestimonialId,
    pub client_name: String,
    pub client_company: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayOrdered for VideoTestimonial {
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
pub struct NewVideoTestimonial {
    pub client_name: String,
    pub client_company: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub visible: bool,
    pub order_index: OrderIndex,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct VideoTestimonialUpdate {
    pub id: VideoTestimonialId,
    pub client_name: Option<String>,
    pub client_company: Option<Option<String>>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<Option<String>>,
    pub visible: Option<bool>,
    pub order_index: Option<OrderIndex>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-1).is_err());
        assert_eq!(Rating::default().value(), 5);
    }
}
