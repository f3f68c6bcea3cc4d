// src/application/commands/auth/register.rs
use super::AuthCommandHandlers;
use crate::{
    application::{
        dto::RegistrationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        otp::Otp,
        shared::Email,
        user::{Password, PasswordHash, User, UserRole},
    },
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandHandlers {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<RegistrationDto> {
        let (email, password) = match (
            Email::new(command.email),
            Password::new(command.password),
        ) {
            (Ok(email), Ok(password)) => (email, password),
            (email, password) => {
                let errors = [email.err(), password.err()]
                    .into_iter()
                    .flatten()
                    .map(|err| err.to_string())
                    .collect();
                return Err(ApplicationError::validation_many(errors));
            }
        };

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "User with email '{email}' already exists"
            )));
        }

        let hashed = self.password_hasher.hash(password.expose()).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let now = self.clock.now();
        let user = User::create(email, password_hash, UserRole::User, now);
        let saved = self.users.save(&user).await?;

        self.issue_otp(&saved).await?;

        let hint = self.otp_codes.dev_hint().unwrap_or_default();
        Ok(RegistrationDto {
            user_id: saved.id.to_string(),
            email: saved.email.into(),
            message: format!(
                "Registration successful. Please check your email for the verification code.{hint}"
            ),
        })
    }

    /// Generates, stores, and logs a fresh code for the user. The log line
    /// stands in for the mail delivery that is out of scope here.
    pub(super) async fn issue_otp(&self, user: &crate::domain::user::User) -> ApplicationResult<()> {
        let code = self.otp_codes.generate();
        let otp = Otp::create(user.id, code, self.otp_validity, self.clock.now());
        self.otps.save(&otp).await?;
        tracing::info!(user = %user.email, code = %otp.code, "verification code issued");
        Ok(())
    }
}
