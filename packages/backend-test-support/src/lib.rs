//! Backend test support utilities
//!
//! Logging bootstrap and unique test data shared by the backend's
//! integration tests.

pub mod logging;
pub mod unique_helpers;

pub use logging::init as init_test_logging;
