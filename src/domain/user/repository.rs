use crate::domain::errors::DomainResult;
use crate::domain::shared::Email;
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert-or-update keyed on the user id. Duplicate emails surface as a
    /// conflict from the backing store.
    async fn save(&self, user: &User) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}
