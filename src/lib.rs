// src/lib.rs
//! Back-office API for a marketing site: blog posts with a draft/published
//! lifecycle, team profiles, testimonials, footer links and an app showcase.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
