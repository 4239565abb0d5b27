// src/domain/content/mod.rs
//! Building blocks shared by every content collection: slugs, the blog
//! publication lifecycle, and the visibility/ordering pair used by the
//! public listings.
pub mod display;
pub(crate) mod ids;
pub mod publication;
pub mod services;
pub mod slug;
pub mod text;

pub use display::{
    Collection, DEFAULT_ORDER_INDEX, DisplayOrdered, DisplaySettings, DisplaySettingsRepository,
    OrderIndex, sort_for_display,
};
pub use publication::{PublicationStatus, PublishRequest, PublishState};
pub use services::SlugService;
pub use slug::{Slug, SlugGenerator, SlugOrigin};
