//! Persistent-entity metadata.
//!
//! This module is the metadata registry the self-link provider consults when no
//! lookup claims a type.
//!
//! # Main Components
//!
//! - [`PersistentEntity`] - Trait that domain types implement to expose their identifier
//! - [`EntityType`] - Runtime identity of a registered type
//! - [`EntityDescriptor`] - Type-erased identifier accessor for one type
//! - [`MappingContext`] - A set of descriptors built up front
//! - [`PersistentEntities`] - Ordered view over one or more mapping contexts

pub mod context;
pub mod entity;

pub use context::*;
pub use entity::*;
