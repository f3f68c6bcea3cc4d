// src/application/commands/auth/login.rs
use super::AuthCommandHandlers;
use crate::{
    application::{
        dto::AuthResponseDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::shared::Email,
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandHandlers {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthResponseDto> {
        let mut errors = Vec::new();
        let email = match Email::new(command.email) {
            Ok(email) => Some(email),
            Err(err) => {
                errors.push(err.to_string());
                None
            }
        };
        if command.password.is_empty() {
            errors.push("Password is required".into());
        }
        let Some(email) = email.filter(|_| errors.is_empty()) else {
            return Err(ApplicationError::validation_many(errors));
        };

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("Invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized("Invalid credentials")
                }
                other => other,
            })?;

        if !user.is_email_verified {
            return Err(ApplicationError::unauthorized(
                "Please verify your email before logging in",
            ));
        }

        let token = self.token_manager.issue(&user).await?;
        Ok(AuthResponseDto {
            user: user.into(),
            access_token: token.access_token,
        })
    }
}
