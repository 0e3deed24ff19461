use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::mapping::PersistentEntity;

static NEXT_PROFILE_ID: AtomicU64 = AtomicU64::new(1);

/// A user-facing profile, the sample entity used throughout the docs and tests.
///
/// # Persistent Entity
/// The `id` field is the entity's own identifier; see
/// [`impl PersistentEntity for Profile`](#impl-PersistentEntity-for-Profile).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub kind: String,
}

impl Profile {
    /// Creates a new Profile with a generated id (`profile_1`, `profile_2`, ...).
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        let id = NEXT_PROFILE_ID.fetch_add(1, Ordering::SeqCst);
        Self::with_id(format!("profile_{}", id), name, kind)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl PersistentEntity for Profile {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}
