//! Runtime setup.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`default_provider`] - Wires a [`DefaultSelfLinkProvider`](crate::support::DefaultSelfLinkProvider) from configuration

pub mod tracing;

pub use self::tracing::setup_tracing;

use crate::config::LinkConfig;
use crate::link::TypeNameEntityLinks;
use crate::lookup::EntityLookups;
use crate::mapping::PersistentEntities;
use crate::support::DefaultSelfLinkProvider;

/// Builds a provider with [`TypeNameEntityLinks`] configured from `config`.
pub fn default_provider(
    entities: PersistentEntities,
    lookups: EntityLookups,
    config: LinkConfig,
) -> DefaultSelfLinkProvider {
    DefaultSelfLinkProvider::new(entities, TypeNameEntityLinks::with_config(config), lookups)
}
