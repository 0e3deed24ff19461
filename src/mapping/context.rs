//! Registries of entity descriptors.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{EntityDescriptor, EntityType, PersistentEntity};
use crate::error::SelfLinkError;

/// A set of entity descriptors, populated at initialization time.
///
/// # Example
/// ```
/// use self_link::mapping::{MappingContext, PersistentEntities};
/// use self_link::model::Profile;
///
/// let mut context = MappingContext::new();
/// context.add_entity::<Profile>();
/// let entities = PersistentEntities::new(vec![context]);
/// assert_eq!(entities.managed_types().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MappingContext {
    descriptors: HashMap<EntityType, EntityDescriptor>,
    order: Vec<EntityType>,
}

impl MappingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` and returns its descriptor.
    ///
    /// Registering the same type twice keeps the first descriptor.
    pub fn add_entity<T: PersistentEntity>(&mut self) -> &EntityDescriptor {
        let entity_type = EntityType::of::<T>();
        if !self.descriptors.contains_key(&entity_type) {
            debug!(entity_type = entity_type.name(), "Registered");
            self.order.push(entity_type);
        }
        self.descriptors
            .entry(entity_type)
            .or_insert_with(EntityDescriptor::of::<T>)
    }

    pub fn persistent_entity(&self, entity_type: &EntityType) -> Option<&EntityDescriptor> {
        self.descriptors.get(entity_type)
    }

    pub fn contains(&self, entity_type: &EntityType) -> bool {
        self.descriptors.contains_key(entity_type)
    }

    /// Registered types, in registration order.
    pub fn entity_types(&self) -> &[EntityType] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Read-only view over several mapping contexts.
///
/// Contexts are consulted in the order given; the first one that knows a type wins.
#[derive(Debug, Clone)]
pub struct PersistentEntities {
    contexts: Arc<[MappingContext]>,
}

impl PersistentEntities {
    pub fn new(contexts: impl IntoIterator<Item = MappingContext>) -> Self {
        Self {
            contexts: contexts.into_iter().collect(),
        }
    }

    pub fn persistent_entity(&self, entity_type: &EntityType) -> Option<&EntityDescriptor> {
        self.contexts
            .iter()
            .find_map(|context| context.persistent_entity(entity_type))
    }

    /// Like [`persistent_entity`](Self::persistent_entity), but a missing type is an error.
    pub fn required_persistent_entity(
        &self,
        entity_type: &EntityType,
    ) -> Result<&EntityDescriptor, SelfLinkError> {
        self.persistent_entity(entity_type)
            .ok_or_else(|| SelfLinkError::not_found(entity_type.name()))
    }

    /// All managed types across contexts, without duplicates.
    pub fn managed_types(&self) -> Vec<EntityType> {
        let mut types: Vec<EntityType> = Vec::new();
        for entity_type in self.contexts.iter().flat_map(|c| c.entity_types()) {
            if !types.contains(entity_type) {
                types.push(*entity_type);
            }
        }
        types
    }
}

impl From<MappingContext> for PersistentEntities {
    fn from(context: MappingContext) -> Self {
        Self::new([context])
    }
}
