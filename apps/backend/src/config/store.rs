use std::str::FromStr;
use std::sync::Arc;

use super::{must_var, var_or};
use crate::error::AppError;
use crate::store::{KvStore, MemoryStore, RedisStore};

/// Which store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local map; state is lost on exit.
    Memory,
    Redis,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "redis" => Ok(StoreKind::Redis),
            other => Err(AppError::config(format!(
                "STORE_KIND must be 'memory' or 'redis', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub redis_url: Option<String>,
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self {
            kind: StoreKind::Memory,
            redis_url: None,
        }
    }

    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            kind: StoreKind::Redis,
            redis_url: Some(url.into()),
        }
    }

    /// Whether state written through this store is gone once the process
    /// exits.
    pub fn is_ephemeral(&self) -> bool {
        self.kind == StoreKind::Memory
    }

    /// `STORE_KIND` (default `memory`); `REDIS_URL` is required for redis.
    pub fn from_env() -> Result<Self, AppError> {
        let kind_raw = var_or("STORE_KIND", "memory".to_string())?;
        match kind_raw.parse::<StoreKind>()? {
            StoreKind::Memory => Ok(Self::memory()),
            StoreKind::Redis => Ok(Self::redis(must_var("REDIS_URL")?)),
        }
    }

    pub async fn connect(&self) -> Result<Arc<dyn KvStore>, AppError> {
        match self.kind {
            StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
            StoreKind::Redis => {
                let url = self
                    .redis_url
                    .as_deref()
                    .ok_or_else(|| AppError::config("REDIS_URL is required for the redis store"))?;
                Ok(Arc::new(RedisStore::connect(url).await?))
            }
        }
    }
}
