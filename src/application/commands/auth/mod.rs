// src/application/commands/auth/mod.rs
mod login;
mod register;
mod resend_otp;
mod service;
mod verify_otp;

pub use login::LoginCommand;
pub use register::RegisterUserCommand;
pub use resend_otp::ResendOtpCommand;
pub use service::AuthCommandHandlers;
pub use verify_otp::VerifyOtpCommand;
