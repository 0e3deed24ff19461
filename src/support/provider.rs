//! # Self-Link Provider
//!
//! Resolution order for an entity of type `T`:
//!
//! 1. The first [`EntityLookup`](crate::lookup::EntityLookup) that supports `T` provides the identifier.
//! 2. Otherwise the entity's own id, read through its [`EntityDescriptor`](crate::mapping::EntityDescriptor).
//! 3. If `T` has no descriptor either, resolution fails with [`SelfLinkError::NotFound`].
//!
//! The identifier is then handed to the [`EntityLinks`] collaborator, which formats the URI.

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::error::SelfLinkError;
use crate::link::{EntityLinks, Link};
use crate::lookup::EntityLookups;
use crate::mapping::{EntityType, PersistentEntities};

/// Creates links pointing at an entity's own resource.
///
/// The methods here are type-erased so the trait can be used as `Arc<dyn SelfLinkProvider>`.
/// Typed callers use [`SelfLinkProviderExt::create_self_link_for`].
pub trait SelfLinkProvider: Send + Sync {
    /// Self link for `entity`, which must be an instance of `entity_type`.
    fn create_self_link_for_type(
        &self,
        entity_type: EntityType,
        entity: &dyn Any,
    ) -> Result<Link, SelfLinkError>;

    /// Self link for an entity of `entity_type` whose identifier is already known.
    fn create_self_link_for_id(
        &self,
        entity_type: EntityType,
        identifier: &str,
    ) -> Result<Link, SelfLinkError>;
}

/// Typed convenience on top of [`SelfLinkProvider`].
pub trait SelfLinkProviderExt: SelfLinkProvider {
    /// Self link for `entity`, keyed on the static type `T`.
    ///
    /// Wrappers are not looked through: `&Arc<Profile>` resolves as
    /// `Arc<Profile>`, which is normally unregistered. Pass `&*arc` instead.
    fn create_self_link_for<T: Any>(&self, entity: &T) -> Result<Link, SelfLinkError> {
        self.create_self_link_for_type(EntityType::of::<T>(), entity)
    }
}

impl<P: SelfLinkProvider + ?Sized> SelfLinkProviderExt for P {}

/// The default [`SelfLinkProvider`].
///
/// # Example
/// ```
/// use self_link::link::TypeNameEntityLinks;
/// use self_link::lookup::EntityLookups;
/// use self_link::mapping::{MappingContext, PersistentEntities};
/// use self_link::model::Profile;
/// use self_link::support::{DefaultSelfLinkProvider, SelfLinkProviderExt};
///
/// let mut context = MappingContext::new();
/// context.add_entity::<Profile>();
///
/// let provider = DefaultSelfLinkProvider::new(
///     PersistentEntities::from(context),
///     TypeNameEntityLinks::new(),
///     EntityLookups::empty(),
/// );
///
/// let link = provider.create_self_link_for(&Profile::with_id("42", "Name", "Type")).unwrap();
/// assert!(link.href().ends_with("/42"));
/// ```
#[derive(Clone)]
pub struct DefaultSelfLinkProvider {
    entities: PersistentEntities,
    entity_links: Arc<dyn EntityLinks>,
    lookups: EntityLookups,
}

impl DefaultSelfLinkProvider {
    pub fn new(
        entities: PersistentEntities,
        entity_links: impl EntityLinks + 'static,
        lookups: EntityLookups,
    ) -> Self {
        Self {
            entities,
            entity_links: Arc::new(entity_links),
            lookups,
        }
    }

    /// Starts a builder where every collaborator must be supplied before [`build`](DefaultSelfLinkProviderBuilder::build).
    pub fn builder() -> DefaultSelfLinkProviderBuilder {
        DefaultSelfLinkProviderBuilder::default()
    }

    pub fn entities(&self) -> &PersistentEntities {
        &self.entities
    }

    pub fn lookups(&self) -> &EntityLookups {
        &self.lookups
    }

    fn resource_id(
        &self,
        entity_type: &EntityType,
        entity: &dyn Any,
    ) -> Result<String, SelfLinkError> {
        if let Some(lookup) = self.lookups.plugin_for(entity_type) {
            debug!("Using entity lookup");
            return lookup.resource_identifier(entity);
        }

        let descriptor = self
            .entities
            .required_persistent_entity(entity_type)
            .inspect_err(|_| warn!("No persistent entity metadata"))?;
        debug!("Using entity id");
        descriptor.identifier_of(entity)
    }
}

impl SelfLinkProvider for DefaultSelfLinkProvider {
    #[instrument(skip_all, fields(entity_type = %entity_type))]
    fn create_self_link_for_type(
        &self,
        entity_type: EntityType,
        entity: &dyn Any,
    ) -> Result<Link, SelfLinkError> {
        if !entity_type.is_instance(entity) {
            return Err(SelfLinkError::InvalidArgument(format!(
                "Value is not an instance of {}",
                entity_type
            )));
        }

        let id = self.resource_id(&entity_type, entity)?;
        let link = self.entity_links.link_to_item_resource(&entity_type, &id);
        debug!(%id, href = link.href(), "Created self link");
        Ok(link)
    }

    #[instrument(skip_all, fields(entity_type = %entity_type, identifier = %identifier))]
    fn create_self_link_for_id(
        &self,
        entity_type: EntityType,
        identifier: &str,
    ) -> Result<Link, SelfLinkError> {
        let known = self.lookups.plugin_for(&entity_type).is_some()
            || self.entities.persistent_entity(&entity_type).is_some();
        if !known {
            warn!("No persistent entity metadata");
            return Err(SelfLinkError::not_found(entity_type.name()));
        }

        Ok(self.entity_links.link_to_item_resource(&entity_type, identifier))
    }
}

/// Builder for [`DefaultSelfLinkProvider`].
///
/// All three collaborators are required; an empty lookup sequence counts as supplied.
#[derive(Default)]
pub struct DefaultSelfLinkProviderBuilder {
    entities: Option<PersistentEntities>,
    entity_links: Option<Arc<dyn EntityLinks>>,
    lookups: Option<EntityLookups>,
}

impl DefaultSelfLinkProviderBuilder {
    pub fn entities(mut self, entities: PersistentEntities) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn entity_links(mut self, entity_links: impl EntityLinks + 'static) -> Self {
        self.entity_links = Some(Arc::new(entity_links));
        self
    }

    /// Like [`entity_links`](Self::entity_links), for a link builder that is already behind an `Arc`.
    pub fn shared_entity_links(mut self, entity_links: Arc<dyn EntityLinks>) -> Self {
        self.entity_links = Some(entity_links);
        self
    }

    pub fn lookups(mut self, lookups: impl Into<EntityLookups>) -> Self {
        self.lookups = Some(lookups.into());
        self
    }

    pub fn build(self) -> Result<DefaultSelfLinkProvider, SelfLinkError> {
        let entities = self
            .entities
            .ok_or_else(|| missing("PersistentEntities"))?;
        let entity_links = self.entity_links.ok_or_else(|| missing("EntityLinks"))?;
        let lookups = self.lookups.ok_or_else(|| missing("EntityLookups"))?;

        Ok(DefaultSelfLinkProvider {
            entities,
            entity_links,
            lookups,
        })
    }
}

fn missing(collaborator: &str) -> SelfLinkError {
    SelfLinkError::InvalidArgument(format!("{} is required", collaborator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::TypeNameEntityLinks;
    use crate::lookup::lookup_for;
    use crate::mapping::{MappingContext, PersistentEntity};

    struct Article {
        id: u32,
        slug: String,
    }

    impl PersistentEntity for Article {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn entities() -> PersistentEntities {
        let mut context = MappingContext::new();
        context.add_entity::<Article>();
        context.into()
    }

    fn article() -> Article {
        Article {
            id: 3,
            slug: "hello-world".into(),
        }
    }

    #[test]
    fn falls_back_to_entity_id() {
        let provider =
            DefaultSelfLinkProvider::new(entities(), TypeNameEntityLinks::new(), EntityLookups::empty());
        let link = provider.create_self_link_for(&article()).unwrap();
        assert_eq!(link.href(), format!("/{}/3", std::any::type_name::<Article>()));
    }

    #[test]
    fn lookup_overrides_entity_id() {
        let lookups: EntityLookups = vec![Arc::new(lookup_for::<Article, _>(|a| a.slug.clone()))
            as Arc<dyn crate::lookup::EntityLookup>]
        .into();
        let provider = DefaultSelfLinkProvider::new(entities(), TypeNameEntityLinks::new(), lookups);
        let link = provider.create_self_link_for(&article()).unwrap();
        assert!(link.href().ends_with("/hello-world"));
    }

    #[test]
    fn mismatched_value_is_rejected() {
        let provider =
            DefaultSelfLinkProvider::new(entities(), TypeNameEntityLinks::new(), EntityLookups::empty());
        let err = provider
            .create_self_link_for_type(EntityType::of::<Article>(), &"3")
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn link_for_known_identifier() {
        let provider =
            DefaultSelfLinkProvider::new(entities(), TypeNameEntityLinks::new(), EntityLookups::empty());
        let link = provider
            .create_self_link_for_id(EntityType::of::<Article>(), "99")
            .unwrap();
        assert!(link.href().ends_with("/99"));

        let err = provider
            .create_self_link_for_id(EntityType::of::<String>(), "99")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn builder_accepts_shared_entity_links() {
        let links: Arc<dyn EntityLinks> = Arc::new(TypeNameEntityLinks::new());
        let provider = DefaultSelfLinkProvider::builder()
            .entities(entities())
            .shared_entity_links(links.clone())
            .lookups(EntityLookups::empty())
            .build()
            .unwrap();

        assert_eq!(provider.entities().managed_types(), vec![EntityType::of::<Article>()]);
        assert_eq!(Arc::strong_count(&links), 2);
        let link = provider.create_self_link_for(&article()).unwrap();
        assert!(link.href().ends_with("/3"));
    }

    #[test]
    fn builder_names_missing_collaborator() {
        let err = DefaultSelfLinkProvider::builder()
            .entities(entities())
            .lookups(EntityLookups::empty())
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            SelfLinkError::InvalidArgument("EntityLinks is required".into())
        );
    }
}
