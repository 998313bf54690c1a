//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clock;
pub mod memory;
pub mod postgres;

pub use clock::SystemClock;
pub use memory::InMemoryPostRepository;
pub use postgres::{ensure_schema, PostgresPostRepository};
