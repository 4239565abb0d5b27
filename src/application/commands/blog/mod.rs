// src/application/commands/blog/mod.rs
mod create;
mod delete;
mod service;
mod status;
mod update;

pub use create::CreateBlogPostCommand;
pub use delete::DeleteBlogPostCommand;
pub use service::BlogCommandService;
pub use status::SetBlogStatusCommand;
pub use update::UpdateBlogPostCommand;
