// src/application/commands/team/delete.rs
use super::TeamCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

#[derive(Debug, Clone)]
pub struct DeleteTeamMemberCommand {
    pub id: i64,
}

impl TeamCommandService {
    /// Posts written by the member keep existing with `author_id` cleared.
    pub async fn delete_member(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTeamMemberCommand,
    ) -> ApplicationResult<()> {
        actor.require("team", "delete")?;
        let member = self.load(command.id).await?;
        self.repo.delete(member.id).await?;
        tracing::info!(
            member_id = i64::from(member.id),
            slug = %member.slug,
            actor = %actor.username,
            "team member deleted"
        );
        Ok(())
    }
}
