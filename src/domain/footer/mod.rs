// src/domain/footer/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    FooterCategory, FooterLink, FooterLinkId, FooterLinkUpdate, NewFooterLink, SocialPlatform,
};
pub use repository::FooterLinkRepository;
