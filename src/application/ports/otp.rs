// src/application/ports/otp.rs
use crate::domain::otp::OtpCode;

/// Source of one-time codes. The production implementation draws random
/// six-digit codes; development environments pin a fixed code so the flow
/// can be exercised without a mail sink.
pub trait OtpCodeGenerator: Send + Sync {
    fn generate(&self) -> OtpCode;
    /// Hint appended to user-facing registration messages in development.
    fn dev_hint(&self) -> Option<String>;
}
