use diesel::prelude::*;

use crate::domain::platform::{NewPlatform as DomainNewPlatform, Platform as DomainPlatform};
use crate::domain::types::{EntityName, PlatformId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::platforms)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::platform::Platform`].
pub struct Platform {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::platforms)]
/// Insertable and changeset form of [`Platform`].
pub struct NewPlatform<'a> {
    pub name: &'a str,
}

impl TryFrom<Platform> for DomainPlatform {
    type Error = TypeConstraintError;

    fn try_from(platform: Platform) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PlatformId::new(platform.id)?,
            name: EntityName::new(platform.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewPlatform> for NewPlatform<'a> {
    fn from(platform: &'a DomainNewPlatform) -> Self {
        Self {
            name: platform.name.as_str(),
        }
    }
}
