// src/domain/footer/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::footer::entity::{FooterLink, FooterLinkId, FooterLinkUpdate, NewFooterLink};
use async_trait::async_trait;

#[async_trait]
pub trait FooterLinkRepository: Send + Sync {
    async fn insert(&self, link: NewFooterLink) -> DomainResult<FooterLink>;
    async fn update(&self, update: FooterLinkUpdate) -> DomainResult<FooterLink>;
    async fn delete(&self, id: FooterLinkId) -> DomainResult<()>;
    async fn find_by_id(&self, id: FooterLinkId) -> DomainResult<Option<FooterLink>>;
    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<FooterLink>>;
}
