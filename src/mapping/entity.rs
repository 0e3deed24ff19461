//! # Entity Metadata
//!
//! Types opt into self-link resolution by implementing [`PersistentEntity`].
//! Registering such a type in a [`MappingContext`](super::MappingContext) produces an
//! [`EntityDescriptor`], which knows how to pull the identifier out of a type-erased value.

use std::any::{type_name, Any, TypeId};
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::error::SelfLinkError;

/// Trait that any domain type must implement to be managed by the metadata registry.
///
/// The associated `Id` only needs to be `Display`: links carry the identifier's string form.
pub trait PersistentEntity: Any + Send + Sync {
    /// The identifier type (e.g., String, u64).
    type Id: Display;

    /// Returns the entity's own identifier.
    fn id(&self) -> Self::Id;
}

/// Runtime identity of a type, paired with its fully qualified name.
#[derive(Clone, Copy)]
pub struct EntityType {
    id: TypeId,
    name: &'static str,
}

impl EntityType {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name, e.g. `self_link::model::Profile`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The last path segment of [`name`](Self::name).
    pub fn simple_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Whether `value` is an instance of this type.
    pub fn is_instance(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityType {}

impl std::hash::Hash for EntityType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

type IdentifierAccessor = dyn Fn(&dyn Any) -> Option<String> + Send + Sync;

/// Metadata for one registered type.
///
/// Created once when the type is added to a mapping context and never mutated afterwards.
#[derive(Clone)]
pub struct EntityDescriptor {
    entity_type: EntityType,
    accessor: Arc<IdentifierAccessor>,
}

impl EntityDescriptor {
    pub fn of<T: PersistentEntity>() -> Self {
        Self {
            entity_type: EntityType::of::<T>(),
            accessor: Arc::new(|value: &dyn Any| {
                value.downcast_ref::<T>().map(|entity| entity.id().to_string())
            }),
        }
    }

    pub fn entity_type(&self) -> &EntityType {
        &self.entity_type
    }

    /// Applies the identifier accessor to `value`.
    ///
    /// Fails with [`SelfLinkError::InvalidArgument`] if `value` is not an instance of the
    /// described type.
    pub fn identifier_of(&self, value: &dyn Any) -> Result<String, SelfLinkError> {
        (self.accessor)(value).ok_or_else(|| {
            SelfLinkError::InvalidArgument(format!(
                "Value is not an instance of {}",
                self.entity_type
            ))
        })
    }
}

impl Debug for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("entity_type", &self.entity_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Book {
        isbn: u64,
    }

    impl PersistentEntity for Book {
        type Id = u64;

        fn id(&self) -> u64 {
            self.isbn
        }
    }

    #[test]
    fn entity_type_names() {
        let ty = EntityType::of::<Book>();
        assert!(ty.name().ends_with("::Book"));
        assert_eq!(ty.simple_name(), "Book");
        assert_eq!(ty, EntityType::of::<Book>());
        assert_ne!(ty, EntityType::of::<String>());
    }

    #[test]
    fn descriptor_reads_identifier() {
        let descriptor = EntityDescriptor::of::<Book>();
        let book = Book { isbn: 9780131103627 };
        assert_eq!(descriptor.identifier_of(&book).unwrap(), "9780131103627");
        assert!(descriptor.entity_type().is_instance(&book));
    }

    #[test]
    fn descriptor_rejects_foreign_values() {
        let descriptor = EntityDescriptor::of::<Book>();
        let err = descriptor.identifier_of(&"not a book").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
