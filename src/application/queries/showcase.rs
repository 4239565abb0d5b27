// src/application/queries/showcase.rs
use std::sync::Arc;

use super::sees_hidden;
use crate::{
    application::{
        dto::{AuthenticatedUser, ShowcaseAppDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::sort_for_display,
        showcase::{ShowcaseAppId, ShowcaseAppRepository},
    },
};

const RESOURCE: &str = "showcase";

pub struct ShowcaseQueryService {
    repo: Arc<dyn ShowcaseAppRepository>,
}

impl ShowcaseQueryService {
    pub fn new(repo: Arc<dyn ShowcaseAppRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_apps(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Vec<ShowcaseAppDto>> {
        let mut apps = self.repo.list(sees_hidden(actor, RESOURCE)).await?;
        sort_for_display(&mut apps);
        Ok(apps.into_iter().map(Into::into).collect())
    }

    pub async fn get_app(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<ShowcaseAppDto> {
        let id = ShowcaseAppId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .filter(|a| a.visible || sees_hidden(actor, RESOURCE))
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing("showcase app"))
    }
}
