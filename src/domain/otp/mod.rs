// src/domain/otp/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Otp, OtpCode, OtpId};
pub use repository::OtpRepository;
