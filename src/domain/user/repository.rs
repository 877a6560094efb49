use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Batch lookup used to attach author names to article listings.
    /// Unknown ids are skipped; result order is unspecified.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;
}
