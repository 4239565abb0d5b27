// src/application/dto/testimonials.rs
use crate::domain::testimonial::{TextTestimonial, VideoTestimonial};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TextTestimonialDto {
    pub id: i64,
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_position: Option<String>,
    pub testimonial_text: String,
    pub rating: u8,
    pub visible: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TextTestimonial> for TextTestimonialDto {
    fn from(t: TextTestimonial) -> Self {
        Self {
            id: t.id.into(),
            client_name: t.client_name,
            client_company: t.client_company,
            client_position: t.client_position,
            testimonial_text: t.testimonial_text,
            rating: t.rating.value(),
            visible: t.visible,
            order_index: t.order_index.into(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoTestimonialDto {
    pub id: i64,
    pub client_name: String,
    pub client_company: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub visible: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VideoTestimonial> for VideoTestimonialDto {
    fn from(t: VideoTestimonial) -> Self {
        Self {
            id: t.id.into(),
            client_name: t.client_name,
            client_company: t.client_company,
            video_url: t.video_url,
            thumbnail_url: t.thumbnail_url,
            visible: t.visible,
            order_index: t.order_index.into(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
