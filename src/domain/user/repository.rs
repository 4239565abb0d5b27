// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{AdminUser, NewAdminUser},
    value_objects::{UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewAdminUser) -> DomainResult<AdminUser>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<AdminUser>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<AdminUser>>;
}
