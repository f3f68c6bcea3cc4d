// src/application/commands/auth/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        otp::OtpCodeGenerator,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    domain::{otp::OtpRepository, user::UserRepository},
};
use chrono::Duration;

pub struct AuthCommandHandlers {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) otps: Arc<dyn OtpRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) otp_codes: Arc<dyn OtpCodeGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) otp_validity: Duration,
}

impl AuthCommandHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        otps: Arc<dyn OtpRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        otp_codes: Arc<dyn OtpCodeGenerator>,
        clock: Arc<dyn Clock>,
        otp_validity: Duration,
    ) -> Self {
        Self {
            users,
            otps,
            password_hasher,
            token_manager,
            otp_codes,
            clock,
            otp_validity,
        }
    }
}
