//! Sample domain types implementing [`PersistentEntity`](crate::mapping::PersistentEntity).

pub mod profile;

pub use profile::*;
