use serde::Serialize;

use crate::domain::types::{EntityName, PlatformId};
use crate::query::{FindOptions, Identified, sort_fields};

sort_fields! {
    /// Platforms can only be ordered by identifier.
    pub enum PlatformSortField {
        Id => "id",
    }
}

/// Resolved listing options for platforms.
pub type PlatformFindOptions = FindOptions<PlatformSortField>;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Platform {
    pub id: PlatformId,
    pub name: EntityName,
}

impl Identified for Platform {
    fn identifier(&self) -> i64 {
        self.id.get()
    }
}

/// Payload for creating or renaming a platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlatform {
    pub name: EntityName,
}

impl NewPlatform {
    #[must_use]
    pub fn new(name: EntityName) -> Self {
        Self { name }
    }
}
