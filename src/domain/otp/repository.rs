use crate::domain::errors::DomainResult;
use crate::domain::otp::entity::{Otp, OtpCode};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Stores the latest code for the user, replacing any previous one.
    async fn save(&self, otp: &Otp) -> DomainResult<()>;
    /// Returns the stored code for the user only when the codes match.
    async fn find_by_user_and_code(
        &self,
        user_id: UserId,
        code: &OtpCode,
    ) -> DomainResult<Option<Otp>>;
}
