// src/application/commands/team/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTeamMemberCommand;
pub use delete::DeleteTeamMemberCommand;
pub use service::TeamCommandService;
pub use update::UpdateTeamMemberCommand;
