// src/application/queries/blog/mod.rs
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetBlogPostBySlugQuery;
pub use list::ListBlogPostsQuery;
pub use service::BlogQueryService;
