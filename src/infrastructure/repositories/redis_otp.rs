// src/infrastructure/repositories/redis_otp.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::otp::{Otp, OtpCode, OtpId, OtpRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::Pool;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// OTPs are stored per user under `otp:{user_id}` with a TTL matching the
/// remaining validity, so Redis handles expiry cleanup on its own. Saving a
/// new code for a user replaces any outstanding one.
#[derive(Clone)]
pub struct RedisOtpRepository {
    pool: Pool,
}

impl RedisOtpRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    fn key(user_id: UserId) -> String {
        format!("otp:{user_id}")
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct OtpRecord {
    id: Uuid,
    user_id: Uuid,
    code: String,
    expires_at: DateTime<Utc>,
    is_used: bool,
    created_at: DateTime<Utc>,
}

impl From<&Otp> for OtpRecord {
    fn from(otp: &Otp) -> Self {
        Self {
            id: otp.id.as_uuid(),
            user_id: otp.user_id.as_uuid(),
            code: otp.code.as_str().to_string(),
            expires_at: otp.expires_at,
            is_used: otp.is_used,
            created_at: otp.created_at,
        }
    }
}

impl TryFrom<OtpRecord> for Otp {
    type Error = DomainError;

    fn try_from(record: OtpRecord) -> Result<Self, Self::Error> {
        Ok(Otp::reconstruct(
            OtpId::from(record.id),
            UserId::from(record.user_id),
            OtpCode::new(record.code)?,
            record.expires_at,
            record.is_used,
            record.created_at,
        ))
    }
}

fn map_redis(err: impl std::fmt::Display) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[async_trait]
impl OtpRepository for RedisOtpRepository {
    async fn save(&self, otp: &Otp) -> DomainResult<()> {
        let mut conn = self.pool.get().await.map_err(map_redis)?;

        let record = OtpRecord::from(otp);
        let payload = serde_json::to_string(&record).map_err(map_redis)?;

        let remaining = (otp.expires_at - Utc::now()).num_seconds().max(1) as u64;
        conn.set_ex::<_, _, ()>(Self::key(otp.user_id), payload, remaining)
            .await
            .map_err(map_redis)?;
        Ok(())
    }

    async fn find_by_user_and_code(
        &self,
        user_id: UserId,
        code: &OtpCode,
    ) -> DomainResult<Option<Otp>> {
        let mut conn = self.pool.get().await.map_err(map_redis)?;

        let payload: Option<String> = conn
            .get(Self::key(user_id))
            .await
            .map_err(map_redis)?;
        let Some(payload) = payload else {
            return Ok(None);
        };

        let record: OtpRecord = serde_json::from_str(&payload).map_err(map_redis)?;
        if record.code != code.as_str() {
            return Ok(None);
        }
        Otp::try_from(record).map(Some)
    }
}
