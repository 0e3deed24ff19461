#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Self Link
//!
//! > **Self links for persisted entities in a hypermedia API.**
//!
//! Every resource representation in a HATEOAS API carries a `self` link pointing back at its
//! canonical location. This crate computes that link: it finds the entity's identifier and
//! hands it to a link builder.
//!
//! ## 🚀 Core Concepts
//!
//! ### Identifier resolution
//! For an entity of type `T`, the identifier comes from:
//! 1.  The first registered [`EntityLookup`](lookup::EntityLookup) that supports `T`, e.g. to
//!     expose a username instead of a numeric id.
//! 2.  Otherwise the entity's own id, declared by implementing
//!     [`PersistentEntity`](mapping::PersistentEntity) and registering the type in a
//!     [`MappingContext`](mapping::MappingContext).
//!
//! A type that neither a lookup nor the registry knows is an error
//! ([`SelfLinkError::NotFound`](error::SelfLinkError::NotFound)).
//!
//! ### Mocking
//! [`mock`] has recording link builders and lookups for tests.
//!
//! ## 🗺️ Module Tour
//!
//! - [`mapping`]: the metadata registry ([`PersistentEntities`](mapping::PersistentEntities)).
//! - [`lookup`]: pluggable identifier strategies.
//! - [`link`]: [`Link`](link::Link) and the [`EntityLinks`](link::EntityLinks) builders.
//! - [`support`]: [`DefaultSelfLinkProvider`](support::DefaultSelfLinkProvider), the resolver itself.
//! - [`config`]: link formatting settings, loadable from the environment.
//! - [`runtime`]: tracing setup and wiring helpers.
//! - [`model`]: the sample [`Profile`](model::Profile) entity.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Run tests
//! cargo test
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod lookup;
pub mod mapping;
pub mod mock;
pub mod model;
pub mod runtime;
pub mod support;
