//! # Mock Collaborators
//!
//! Utilities for testing code that depends on [`EntityLinks`] or [`EntityLookup`].
//!
//! - [`MockEntityLinks`] formats links as `/<type name>/<identifier>` and records every call.
//! - [`MockLookup`] supports a configured set of types, returns a canned identifier and
//!   counts how often it was consulted.
//!
//! Both are cheap to clone; clones share their recorded state, so a test can hand one
//! clone to the provider and keep another for assertions.

use std::any::Any;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::SelfLinkError;
use crate::link::{EntityLinks, Link};
use crate::lookup::EntityLookup;
use crate::mapping::EntityType;

/// A recorded `link_to_item_resource` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLinkCall {
    pub type_name: &'static str,
    pub identifier: String,
}

/// Link builder that records its calls.
///
/// # Example
/// ```
/// use self_link::link::EntityLinks;
/// use self_link::mapping::EntityType;
/// use self_link::mock::MockEntityLinks;
///
/// let links = MockEntityLinks::new();
/// let link = links.link_to_item_resource(&EntityType::of::<u8>(), "1");
/// assert_eq!(link.href(), "/u8/1");
/// assert_eq!(links.calls().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEntityLinks {
    calls: Arc<Mutex<Vec<ItemLinkCall>>>,
}

impl MockEntityLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// All item-link calls so far, oldest first.
    pub fn calls(&self) -> Vec<ItemLinkCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics unless no item link was requested.
    pub fn verify_no_calls(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "Unexpected link requests: {:?}", calls);
    }
}

impl EntityLinks for MockEntityLinks {
    fn link_to_item_resource(&self, entity_type: &EntityType, identifier: &str) -> Link {
        self.calls.lock().unwrap().push(ItemLinkCall {
            type_name: entity_type.name(),
            identifier: identifier.to_string(),
        });
        Link::new(format!("/{}/{}", entity_type.name(), identifier))
    }

    fn link_to_collection_resource(&self, entity_type: &EntityType) -> Link {
        Link::with_rel(format!("/{}", entity_type.name()), crate::link::COLLECTION_REL)
    }
}

/// Lookup with configurable support and a canned identifier.
///
/// # Example
/// ```
/// use self_link::lookup::EntityLookup;
/// use self_link::mapping::EntityType;
/// use self_link::mock::MockLookup;
///
/// let lookup = MockLookup::new().supporting::<u8>().return_identifier("foo");
/// assert!(lookup.supports(&EntityType::of::<u8>()));
/// assert_eq!(lookup.resource_identifier(&1u8).unwrap(), "foo");
/// assert_eq!(lookup.identifier_calls(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    supported: HashSet<EntityType>,
    response: Option<Result<String, SelfLinkError>>,
    supports_calls: Arc<AtomicUsize>,
    identifier_calls: Arc<AtomicUsize>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `T` to the supported types.
    pub fn supporting<T: Any>(mut self) -> Self {
        self.supported.insert(EntityType::of::<T>());
        self
    }

    pub fn return_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.response = Some(Ok(identifier.into()));
        self
    }

    pub fn return_err(mut self, error: SelfLinkError) -> Self {
        self.response = Some(Err(error));
        self
    }

    /// Wraps a clone for registration; `self` keeps observing the shared counters.
    pub fn shared(&self) -> Arc<dyn EntityLookup> {
        Arc::new(self.clone())
    }

    pub fn supports_calls(&self) -> usize {
        self.supports_calls.load(Ordering::SeqCst)
    }

    pub fn identifier_calls(&self) -> usize {
        self.identifier_calls.load(Ordering::SeqCst)
    }
}

impl EntityLookup for MockLookup {
    fn supports(&self, entity_type: &EntityType) -> bool {
        self.supports_calls.fetch_add(1, Ordering::SeqCst);
        self.supported.contains(entity_type)
    }

    fn resource_identifier(&self, _entity: &dyn Any) -> Result<String, SelfLinkError> {
        self.identifier_calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .unwrap_or_else(|| Err(SelfLinkError::Lookup("No identifier configured".into())))
    }
}
