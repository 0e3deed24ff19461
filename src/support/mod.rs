//! Self-link creation.
//!
//! [`DefaultSelfLinkProvider`] is the standard [`SelfLinkProvider`]: it asks the registered
//! lookups for a custom identifier first and falls back to the entity's own id.

pub mod provider;

pub use provider::*;
