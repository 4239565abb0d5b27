// src/domain/blog/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{BlogPost, BlogPostUpdate, NewBlogPost};
pub use repository::{BlogListOrder, BlogPostFilter, BlogPostReadRepository, BlogPostWriteRepository};
pub use value_objects::{BlogPostId, PostTitle};
