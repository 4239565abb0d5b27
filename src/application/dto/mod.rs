// src/application/dto/mod.rs
pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod display;
pub mod footer;
pub mod showcase;
pub mod team;
pub mod testimonials;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use blog::{AuthorSummaryDto, BlogPostDto};
pub use dashboard::DashboardStatsDto;
pub use display::DisplaySettingsDto;
pub use footer::FooterLinkDto;
pub use showcase::ShowcaseAppDto;
pub use team::TeamMemberDto;
pub use testimonials::{TextTestimonialDto, VideoTestimonialDto};
pub use users::{AdminUserDto, CapabilityView, UserProfileDto};
