// src/application/services/authors.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{AuthorSummaryDto, BlogPostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::BlogPost,
        team::{TeamMemberId, TeamMemberRepository},
    },
};

/// Resolves blog `author_id` references against the team collection.
#[derive(Clone)]
pub struct AuthorDirectory {
    team_repo: Arc<dyn TeamMemberRepository>,
}

impl AuthorDirectory {
    pub fn new(team_repo: Arc<dyn TeamMemberRepository>) -> Self {
        Self { team_repo }
    }

    pub async fn ensure_exists(&self, id: TeamMemberId) -> ApplicationResult<()> {
        match self.team_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::validation(format!(
                "author {id} is not a team member"
            ))),
        }
    }

    pub async fn present(&self, post: BlogPost) -> ApplicationResult<BlogPostDto> {
        let author = match post.author_id {
            Some(id) => self
                .team_repo
                .find_by_id(id)
                .await?
                .as_ref()
                .map(AuthorSummaryDto::from),
            None => None,
        };
        Ok(BlogPostDto::from(post).with_author(author))
    }

    pub async fn present_all(&self, posts: Vec<BlogPost>) -> ApplicationResult<Vec<BlogPostDto>> {
        let mut ids: Vec<TeamMemberId> = posts.iter().filter_map(|p| p.author_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let authors: HashMap<TeamMemberId, AuthorSummaryDto> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.team_repo
                .find_by_ids(&ids)
                .await?
                .iter()
                .map(|m| (m.id, AuthorSummaryDto::from(m)))
                .collect()
        };

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = post.author_id.and_then(|id| authors.get(&id).cloned());
                BlogPostDto::from(post).with_author(author)
            })
            .collect())
    }
}
