//! Unique test data, so tests sharing a store never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A player name that no other test will use.
pub fn unique_username(prefix: &str) -> String {
    unique_str(prefix).to_lowercase()
}

/// A store key prefix ending in `:`, for isolating one test's keys.
pub fn unique_key_prefix(prefix: &str) -> String {
    format!("{}:", unique_str(prefix))
}
