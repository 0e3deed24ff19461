//! Error types for self-link resolution.

use thiserror::Error;

/// Errors that can occur while building a provider or resolving a self link.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelfLinkError {
    /// A required collaborator was missing, or a value did not match its declared type.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Neither a lookup nor the metadata registry knows the entity's type.
    #[error("Couldn't find PersistentEntity for {type_name}!")]
    NotFound { type_name: String },

    /// A lookup was selected but could not compute an identifier.
    #[error("Lookup failed: {0}")]
    Lookup(String),
}

impl SelfLinkError {
    pub fn not_found(type_name: impl Into<String>) -> Self {
        SelfLinkError::NotFound {
            type_name: type_name.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SelfLinkError::InvalidArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SelfLinkError::NotFound { .. })
    }
}

impl From<String> for SelfLinkError {
    fn from(msg: String) -> Self {
        SelfLinkError::Lookup(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_type() {
        let err = SelfLinkError::not_found("my_app::Unknown");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Couldn't find PersistentEntity for my_app::Unknown!"
        );
    }

    #[test]
    fn string_converts_to_lookup_error() {
        let err: SelfLinkError = "no slug".to_string().into();
        assert_eq!(err, SelfLinkError::Lookup("no slug".into()));
        assert!(!err.is_invalid_argument());
    }
}
