//! SeaORM entities

pub mod posts;
