//! Infrastructure layer - wiring the store, services and clock together.

pub mod state;
