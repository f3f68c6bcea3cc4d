// src/domain/otp/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OtpId(Uuid);

impl OtpId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for OtpId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for OtpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Exactly six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::Validation(
                "OTP code must be exactly 6 digits".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-time code bound to a user. Valid while unused and not past its
/// expiry; consumption is one-way.
#[derive(Debug, Clone)]
pub struct Otp {
    pub id: OtpId,
    pub user_id: UserId,
    pub code: OtpCode,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

impl Otp {
    pub fn create(user_id: UserId, code: OtpCode, validity: Duration, now: DateTime<Utc>) -> Self {
        Self {
            id: OtpId::generate(),
            user_id,
            code,
            expires_at: now + validity,
            is_used: false,
            created_at: now,
        }
    }

    pub fn reconstruct(
        id: OtpId,
        user_id: UserId,
        code: OtpCode,
        expires_at: DateTime<Utc>,
        is_used: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            code,
            expires_at,
            is_used,
            created_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && !self.is_expired(now)
    }

    pub fn mark_as_used(self) -> Self {
        Self {
            is_used: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_otp(now: DateTime<Utc>) -> Otp {
        Otp::create(
            UserId::generate(),
            OtpCode::new("123456").unwrap(),
            Duration::minutes(10),
            now,
        )
    }

    #[test]
    fn code_must_be_six_digits() {
        assert!(OtpCode::new("123456").is_ok());
        assert!(OtpCode::new("12345").is_err());
        assert!(OtpCode::new("1234567").is_err());
        assert!(OtpCode::new("12345a").is_err());
    }

    #[test]
    fn fresh_otp_is_valid_within_window() {
        let now = Utc::now();
        let otp = sample_otp(now);
        assert!(otp.is_valid(now));
        assert!(otp.is_valid(now + Duration::minutes(10)));
        assert!(!otp.is_valid(now + Duration::minutes(10) + Duration::seconds(1)));
    }

    #[test]
    fn used_otp_is_never_valid() {
        let now = Utc::now();
        let otp = sample_otp(now).mark_as_used();
        assert!(otp.is_used);
        assert!(!otp.is_valid(now));
    }
}
