// src/domain/team/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewTeamMember, SocialLinks, TeamMember, TeamMemberId, TeamMemberUpdate};
pub use repository::{TeamMemberFilter, TeamMemberRepository};
