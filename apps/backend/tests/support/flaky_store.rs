//! Store wrapper that fails on demand.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use clash_backend::{KvStore, MemoryStore, StoreError};
use parking_lot::Mutex;

#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    down: AtomicBool,
    read_only_keys: Mutex<Vec<String>>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails until `heal`.
    pub fn go_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    /// Writes to keys ending in `suffix` fail until `heal`; reads still work.
    pub fn refuse_writes_to(&self, suffix: &str) {
        self.read_only_keys.lock().push(suffix.to_owned());
    }

    pub fn heal(&self) {
        self.down.store(false, Ordering::SeqCst);
        self.read_only_keys.lock().clear();
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is down".into()));
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> Result<(), StoreError> {
        self.check_read()?;
        if self.read_only_keys.lock().iter().any(|s| key.ends_with(s)) {
            return Err(StoreError::Unavailable(format!("write to '{key}' refused")));
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_read()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_write(key)?;
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.check_write(key)?;
        self.inner.delete(key).await
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError> {
        self.check_write(key)?;
        self.inner.compare_and_swap(key, expected, new).await
    }

    async fn compare_and_delete(&self, key: &str, expected: &str) -> Result<bool, StoreError> {
        self.check_write(key)?;
        self.inner.compare_and_delete(key, expected).await
    }
}
