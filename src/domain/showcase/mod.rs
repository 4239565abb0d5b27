// src/domain/showcase/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    NewShowcaseApp, ScrollDirection, ScrollSpeed, ShowcaseApp, ShowcaseAppId, ShowcaseAppUpdate,
};
pub use repository::ShowcaseAppRepository;
