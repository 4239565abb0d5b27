// src/domain/testimonial/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    NewTextTestimonial, NewVideoTestimonial, Rating, TextTestimonial, TextTestimonialId,
    TextTestimonialUpdate, VideoTestimonial, VideoTestimonialId, VideoTestimonialUpdate,
};
pub use repository::{TextTestimonialRepository, VideoTestimonialRepository};
