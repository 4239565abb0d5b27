// src/domain/mod.rs
pub mod blog;
pub mod content;
pub mod errors;
pub mod footer;
pub mod showcase;
pub mod team;
pub mod testimonial;
pub mod user;
