use crate::domain::author::entity::Author;
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use crate::domain::shared::Email;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert-or-update keyed on the author id.
    async fn save(&self, author: &Author) -> DomainResult<Author>;
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Author>>;
    async fn find_all(&self) -> DomainResult<Vec<Author>>;
}
