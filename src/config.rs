//! Link formatting configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Environment variable overriding [`LinkConfig::base_uri`].
pub const BASE_URI_ENV: &str = "SELF_LINK_BASE_URI";
/// Environment variable overriding [`LinkConfig::self_rel`].
pub const SELF_REL_ENV: &str = "SELF_LINK_REL";

/// Settings for [`TypeNameEntityLinks`](crate::link::TypeNameEntityLinks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Prefix prepended to every href, e.g. `https://api.example.com`. Empty by default.
    #[serde(deserialize_with = "deserialize_base_uri")]
    pub base_uri: String,
    /// Relation name of item links.
    pub self_rel: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_uri: String::new(),
            self_rel: crate::link::SELF_REL.to_string(),
        }
    }
}

impl LinkConfig {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self::default().with_base_uri(base_uri)
    }

    /// Sets the base URI, dropping trailing slashes.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = trim_base_uri(&base_uri.into());
        self
    }

    pub fn with_self_rel(mut self, rel: impl Into<String>) -> Self {
        self.self_rel = rel.into();
        self
    }

    /// Reads `SELF_LINK_BASE_URI` and `SELF_LINK_REL`, keeping defaults for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_uri) = var(BASE_URI_ENV) {
            config = config.with_base_uri(base_uri);
        }
        if let Some(rel) = var(SELF_REL_ENV).filter(|rel| !rel.is_empty()) {
            config.self_rel = rel;
        }
        config
    }
}

fn trim_base_uri(base_uri: &str) -> String {
    base_uri.trim_end_matches('/').to_string()
}

fn deserialize_base_uri<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let base_uri = String::deserialize(deserializer)?;
    Ok(trim_base_uri(&base_uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LinkConfig::default();
        assert_eq!(config.base_uri, "");
        assert_eq!(config.self_rel, "self");
    }

    #[test]
    fn base_uri_trailing_slash_is_trimmed() {
        assert_eq!(
            LinkConfig::new("https://api.example.com//").base_uri,
            "https://api.example.com"
        );
    }

    #[test]
    fn reads_variables() {
        let config = LinkConfig::from_lookup(|key| match key {
            BASE_URI_ENV => Some("http://localhost:8080/api/".to_string()),
            SELF_REL_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.base_uri, "http://localhost:8080/api");
        assert_eq!(config.self_rel, "self");
    }

    #[test]
    fn deserializes_partial_json() {
        let config: LinkConfig = serde_json::from_str(r#"{"base_uri":"/api"}"#).unwrap();
        assert_eq!(config, LinkConfig::new("/api"));
    }

    #[test]
    fn deserialized_base_uri_is_trimmed() {
        use crate::link::{EntityLinks, TypeNameEntityLinks};
        use crate::mapping::EntityType;

        let config: LinkConfig =
            serde_json::from_str(r#"{"base_uri":"https://api.example.com/"}"#).unwrap();
        assert_eq!(config.base_uri, "https://api.example.com");

        let link = TypeNameEntityLinks::with_config(config)
            .link_to_item_resource(&EntityType::of::<u8>(), "1");
        assert_eq!(link.href(), "https://api.example.com/u8/1");
    }
}
