use serde::Serialize;

use crate::domain::types::{EntityName, TagId};
use crate::query::{FindOptions, Identified, sort_fields};

sort_fields! {
    /// Columns a tag listing can be ordered by.
    pub enum TagSortField {
        Id => "id",
        Name => "name",
    }
}

/// Resolved listing options for tags.
pub type TagFindOptions = FindOptions<TagSortField>;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: EntityName,
}

impl Identified for Tag {
    fn identifier(&self) -> i64 {
        self.id.get()
    }
}

/// Payload for creating or renaming a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTag {
    pub name: EntityName,
}

impl NewTag {
    #[must_use]
    pub fn new(name: EntityName) -> Self {
        Self { name }
    }
}
