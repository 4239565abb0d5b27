// src/domain/testimonial/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::testimonial::entity::{
    NewTextTestimonial, NewVideoTestimonial, TextTestimonial, TextTestimonialId,
    TextTestimonialUpdate, VideoTestimonial, VideoTestimonialId, VideoTestimonialUpdate,
};
use async_trait::async_trait;

#[async_trait]
pub trait TextTestimonialRepository: Send + Sync {
    async fn insert(&self, testimonial: NewTextTestimonial) -> DomainResult<TextTestimonial>;
    async fn update(&self, update: TextTestimonialUpdate) -> DomainResult<TextTestimonial>;
    async fn delete(&self, id: TextTestimonialId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TextTestimonialId) -> DomainResult<Option<TextTestimonial>>;
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<TextTestimonial>>;
    async fn count_visible(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait VideoTestimonialRepository: Send + Sync {
    async fn insert(&self, testimonial: NewVideoTestimonial) -> DomainResult<VideoTestimonial>;
    async fn update(&self, update: VideoTestimonialUpdate) -> DomainResult<VideoTestimonial>;
    async fn delete(&self, id: VideoTestimonialId) -> DomainResult<()>;
    async fn find_by_id(&self, id: VideoTestimonialId) -> DomainResult<Option<VideoTestimonial>>;
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<VideoTestimonial>>;
    async fn count_visible(&self) -> DomainResult<u64>;
}
