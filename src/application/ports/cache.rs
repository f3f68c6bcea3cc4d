// src/application/ports/cache.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Generic keyed store with TTL and glob-pattern purge. Values are opaque
/// strings; `get_json`/`set_json` layer serde on top for typed callers.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> ApplicationResult<()>;
    async fn delete(&self, key: &str) -> ApplicationResult<()>;
    async fn delete_by_pattern(&self, pattern: &str) -> ApplicationResult<()>;
}

pub async fn get_json<T: DeserializeOwned>(
    store: &dyn CacheStore,
    key: &str,
) -> ApplicationResult<Option<T>> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| ApplicationError::infrastructure(format!("cache decode: {err}"))),
        None => Ok(None),
    }
}

pub async fn set_json<T: Serialize>(
    store: &dyn CacheStore,
    key: &str,
    value: &T,
    ttl: Duration,
) -> ApplicationResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|err| ApplicationError::infrastructure(format!("cache encode: {err}")))?;
    store.set(key, &raw, ttl).await
}

/// Derives a deterministic key from a prefix and a parameter set: absent
/// values are dropped, the rest sorted by name and rendered `name:value`
/// joined with `|`. Insertion order therefore never changes the key.
pub fn generate_key(prefix: &str, params: &[(&str, Option<String>)]) -> String {
    let mut present: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
        .collect();
    present.sort_by_key(|(name, _)| *name);

    if present.is_empty() {
        return prefix.to_string();
    }

    let rendered: Vec<String> = present
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect();
    format!("{prefix}:{}", rendered.join("|"))
}
