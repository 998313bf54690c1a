//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod post_repo;
pub mod schema;

#[cfg(test)]
mod integration_tests;

pub use post_repo::PostgresPostRepository;
pub use schema::ensure_schema;
