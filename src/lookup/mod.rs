//! Pluggable identifier lookups.
//!
//! A lookup overrides the identifier used in an entity's self link, for example to
//! expose a slug or username instead of the database id.

use std::any::Any;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::SelfLinkError;
use crate::mapping::EntityType;

/// Strategy that computes a custom resource identifier for the types it supports.
pub trait EntityLookup: Send + Sync {
    /// Whether this lookup handles `entity_type`.
    fn supports(&self, entity_type: &EntityType) -> bool;

    /// The identifier to expose for `entity`. Only called after `supports` returned true.
    fn resource_identifier(&self, entity: &dyn Any) -> Result<String, SelfLinkError>;
}

/// A lookup for exactly one type `T`, backed by a closure.
pub struct LookupFor<T, F> {
    identifier: F,
    _entity: PhantomData<fn(&T)>,
}

/// Builds a [`LookupFor`] from a typed closure.
///
/// ```
/// use self_link::lookup::{lookup_for, EntityLookup};
/// use self_link::mapping::EntityType;
/// use self_link::model::Profile;
///
/// let lookup = lookup_for::<Profile, _>(|profile| profile.name.clone());
/// assert!(lookup.supports(&EntityType::of::<Profile>()));
/// ```
pub fn lookup_for<T, F>(identifier: F) -> LookupFor<T, F>
where
    T: Any,
    F: Fn(&T) -> String + Send + Sync,
{
    LookupFor {
        identifier,
        _entity: PhantomData,
    }
}

impl<T, F> EntityLookup for LookupFor<T, F>
where
    T: Any,
    F: Fn(&T) -> String + Send + Sync,
{
    fn supports(&self, entity_type: &EntityType) -> bool {
        *entity_type == EntityType::of::<T>()
    }

    fn resource_identifier(&self, entity: &dyn Any) -> Result<String, SelfLinkError> {
        entity
            .downcast_ref::<T>()
            .map(&self.identifier)
            .ok_or_else(|| {
                SelfLinkError::Lookup(format!(
                    "Lookup for {} received a value of another type",
                    std::any::type_name::<T>()
                ))
            })
    }
}

/// Ordered, immutable sequence of lookups.
///
/// The first lookup in registration order whose `supports` returns true wins.
#[derive(Clone)]
pub struct EntityLookups {
    lookups: Arc<[Arc<dyn EntityLookup>]>,
}

impl EntityLookups {
    pub fn empty() -> Self {
        Self {
            lookups: Arc::from(Vec::new()),
        }
    }

    pub fn plugin_for(&self, entity_type: &EntityType) -> Option<&dyn EntityLookup> {
        self.lookups
            .iter()
            .find(|lookup| lookup.supports(entity_type))
            .map(|lookup| &**lookup)
    }

    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}

impl Default for EntityLookups {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Arc<dyn EntityLookup>>> for EntityLookups {
    fn from(lookups: Vec<Arc<dyn EntityLookup>>) -> Self {
        Self {
            lookups: lookups.into(),
        }
    }
}

impl FromIterator<Arc<dyn EntityLookup>> for EntityLookups {
    fn from_iter<I: IntoIterator<Item = Arc<dyn EntityLookup>>>(iter: I) -> Self {
        Self {
            lookups: iter.into_iter().collect(),
        }
    }
}

impl Debug for EntityLookups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityLookups")
            .field("len", &self.lookups.len())
            .finish()
    }
}
