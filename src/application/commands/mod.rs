// src/application/commands/mod.rs
pub mod auth;
pub mod blog;
pub mod display;
pub mod footer_links;
pub mod showcase;
pub mod team;
pub mod testimonials;
