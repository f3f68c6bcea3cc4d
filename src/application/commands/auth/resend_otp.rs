// src/application/commands/auth/resend_otp.rs
use super::AuthCommandHandlers;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::UserId,
};

pub struct ResendOtpCommand {
    pub user_id: String,
}

impl AuthCommandHandlers {
    pub async fn resend_otp(&self, command: ResendOtpCommand) -> ApplicationResult<()> {
        let user = match UserId::parse(&command.user_id) {
            Ok(id) => self.users.find_by_id(id).await?,
            Err(_) => None,
        };
        let user = user.ok_or_else(|| ApplicationError::not_found("User not found"))?;

        if user.is_email_verified {
            return Err(ApplicationError::validation(
                "User email is already verified",
            ));
        }

        self.issue_otp(&user).await
    }
}
