//! Hypermedia links and the builders that produce them.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::config::LinkConfig;
use crate::mapping::EntityType;

/// Relation name of a resource's link to itself.
pub const SELF_REL: &str = "self";
/// Relation name of a link to a resource's collection.
pub const COLLECTION_REL: &str = "collection";

/// An immutable hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    href: String,
    rel: String,
}

impl Link {
    /// Creates a `self` link.
    pub fn new(href: impl Into<String>) -> Self {
        Self::with_rel(href, SELF_REL)
    }

    pub fn with_rel(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>;rel=\"{}\"", self.href, self.rel)
    }
}

/// Builds links to the item and collection resources of an entity type.
pub trait EntityLinks: Send + Sync {
    /// Link to the single resource of `entity_type` identified by `identifier`.
    fn link_to_item_resource(&self, entity_type: &EntityType, identifier: &str) -> Link;

    /// Link to the collection resource of `entity_type`.
    fn link_to_collection_resource(&self, entity_type: &EntityType) -> Link;
}

/// Formats links as `<base_uri>/<fully qualified type name>/<identifier>`.
#[derive(Debug, Clone, Default)]
pub struct TypeNameEntityLinks {
    config: LinkConfig,
}

impl TypeNameEntityLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }
}

impl EntityLinks for TypeNameEntityLinks {
    fn link_to_item_resource(&self, entity_type: &EntityType, identifier: &str) -> Link {
        Link::with_rel(
            format!("{}/{}/{}", self.config.base_uri, entity_type.name(), identifier),
            self.config.self_rel.clone(),
        )
    }

    fn link_to_collection_resource(&self, entity_type: &EntityType) -> Link {
        Link::with_rel(
            format!("{}/{}", self.config.base_uri, entity_type.name()),
            COLLECTION_REL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;

    #[test]
    fn link_defaults_to_self_rel() {
        let link = Link::new("/invoices/1");
        assert_eq!(link.rel(), "self");
        assert_eq!(link.to_string(), "</invoices/1>;rel=\"self\"");
    }

    #[test]
    fn link_serializes_href_and_rel() {
        let json = serde_json::to_value(Link::new("/invoices/1")).unwrap();
        assert_eq!(json, serde_json::json!({"href": "/invoices/1", "rel": "self"}));
    }

    #[test]
    fn type_name_links() {
        let links = TypeNameEntityLinks::new();
        let ty = EntityType::of::<Invoice>();

        let item = links.link_to_item_resource(&ty, "7");
        assert_eq!(item.href(), format!("/{}/7", ty.name()));
        assert_eq!(item.rel(), SELF_REL);

        let collection = links.link_to_collection_resource(&ty);
        assert_eq!(collection.href(), format!("/{}", ty.name()));
        assert_eq!(collection.rel(), COLLECTION_REL);
    }

    #[test]
    fn configured_base_uri_and_rel() {
        let links = TypeNameEntityLinks::with_config(
            LinkConfig::new("https://api.example.com/").with_self_rel("item"),
        );
        let ty = EntityType::of::<Invoice>();
        let link = links.link_to_item_resource(&ty, "7");
        assert_eq!(link.href(), format!("https://api.example.com/{}/7", ty.name()));
        assert_eq!(link.rel(), "item");
    }
}
