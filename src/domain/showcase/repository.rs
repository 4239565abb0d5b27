// src/domain/showcase/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::showcase::entity::{
    NewShowcaseApp, ShowcaseApp, ShowcaseAppId, ShowcaseAppUpdate,
};
use async_trait::async_trait;

#[async_trait]
pub trait ShowcaseAppRepository: Send + Sync {
    async fn insert(&self, app: NewShowcaseApp) -> DomainResult<ShowcaseApp>;
    async fn update(&self, update: ShowcaseAppUpdate) -> DomainResult<ShowcaseApp>;
    async fn delete(&self, id: ShowcaseAppId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ShowcaseAppId) -> DomainResult<Option<ShowcaseApp>>;
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<ShowcaseApp>>;
}
