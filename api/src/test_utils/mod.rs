//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! The plain in-memory store lives in `adapters::memory`; the mocks here add
//! failure injection and a controllable clock on top of it.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
