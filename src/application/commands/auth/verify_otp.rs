// src/application/commands/auth/verify_otp.rs
use super::AuthCommandHandlers;
use crate::{
    application::{
        dto::AuthResponseDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        otp::OtpCode,
        user::UserId,
    },
};

pub struct VerifyOtpCommand {
    pub user_id: String,
    pub code: String,
}

impl AuthCommandHandlers {
    pub async fn verify_otp(&self, command: VerifyOtpCommand) -> ApplicationResult<AuthResponseDto> {
        let user = match UserId::parse(&command.user_id) {
            Ok(id) => self.users.find_by_id(id).await?,
            Err(_) => None,
        };
        let user = user.ok_or_else(|| ApplicationError::not_found("User not found"))?;

        // A code of the wrong shape can never match a stored one, so it gets
        // the same answer as a mismatch.
        let invalid = || ApplicationError::validation("Invalid or expired OTP");
        let code = OtpCode::new(command.code).map_err(|_| invalid())?;

        let now = self.clock.now();
        let otp = self
            .otps
            .find_by_user_and_code(user.id, &code)
            .await?
            .filter(|otp| otp.is_valid(now))
            .ok_or_else(invalid)?;

        self.otps.save(&otp.mark_as_used()).await?;

        let verified = user.verify_email(now);
        let saved = self.users.save(&verified).await?;

        let token = self.token_manager.issue(&saved).await?;
        Ok(AuthResponseDto {
            user: saved.into(),
            access_token: token.access_token,
        })
    }
}
