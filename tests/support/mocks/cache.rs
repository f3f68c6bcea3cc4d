// tests/support/mocks/cache.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use inkpress::application::error::ApplicationResult;
use inkpress::application::ports::cache::CacheStore;

/// In-memory cache with the same glob semantics the Redis store relies on.
/// TTLs are recorded but never enforced; tests drive staleness explicitly
/// through invalidation.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    // the invalidation service only ever uses prefix globs
    fn glob_match(key: &str, pattern: &str) -> bool {
        match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => key == pattern,
        }
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl: Duration) -> ApplicationResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApplicationResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn delete_by_pattern(&self, pattern: &str) -> ApplicationResult<()> {
        self.entries
            .lock()
            .unwrap()
            .retain(|key, _| !Self::glob_match(key, pattern));
        Ok(())
    }
}
