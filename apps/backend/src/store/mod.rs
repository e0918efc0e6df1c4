//! State store adapter: the key-value persistence contract and its backends.
//!
//! Each operation is atomic on a single key. There are no cross-key
//! transactions; callers that need read-modify-write safety use the
//! conditional operations.

mod error;
pub mod memory;
pub mod redis_store;

use async_trait::async_trait;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Key-value store with single-key atomic operations.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Write `new` only if the current value equals `expected`
    /// (`None` meaning the key is absent). Returns whether the write happened.
    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError>;

    /// Delete the key only if its current value equals `expected`.
    async fn compare_and_delete(&self, key: &str, expected: &str) -> Result<bool, StoreError>;
}
