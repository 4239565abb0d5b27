// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_blog;
mod postgres_display;
mod postgres_footer;
mod postgres_showcase;
mod postgres_team;
mod postgres_testimonials;
mod postgres_user;

pub use postgres_blog::{PostgresBlogPostReadRepository, PostgresBlogPostWriteRepository};
pub use postgres_display::PostgresDisplaySettingsRepository;
pub use postgres_footer::PostgresFooterLinkRepository;
pub use postgres_showcase::PostgresShowcaseAppRepository;
pub use postgres_team::PostgresTeamMemberRepository;
pub use postgres_testimonials::{
    PostgresTextTestimonialRepository, PostgresVideoTestimonialRepository,
};
pub use postgres_user::PostgresUserRepository;
