//! Repository implementation for platforms.

use diesel::prelude::*;

use crate::domain::platform::{NewPlatform, Platform, PlatformFindOptions, PlatformSortField};
use crate::domain::types::PlatformId;
use crate::models::platform::{NewPlatform as DbNewPlatform, Platform as DbPlatform};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PlatformReader, PlatformWriter, apply_window};

impl PlatformReader for DieselRepository {
    fn get_platform_by_id(&self, id: PlatformId) -> RepositoryResult<Option<Platform>> {
        use crate::schema::platforms;

        let mut conn = self.conn()?;
        let platform = platforms::table
            .find(id.get())
            .select(DbPlatform::as_select())
            .first::<DbPlatform>(&mut conn)
            .optional()?;

        platform
            .map(Platform::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_platforms(&self, options: &PlatformFindOptions) -> RepositoryResult<Vec<Platform>> {
        use crate::schema::platforms;

        let mut conn = self.conn()?;

        let query = platforms::table
            .select(DbPlatform::as_select())
            .into_boxed();
        let query = apply_window!(query, platforms::id, options.pagination());

        let order = options.order();
        let query = match (order.field(), order.is_descending()) {
            (PlatformSortField::Id, false) => query.order(platforms::id.asc()),
            (PlatformSortField::Id, true) => query.order(platforms::id.desc()),
        };

        query
            .load::<DbPlatform>(&mut conn)?
            .into_iter()
            .map(|platform| Platform::try_from(platform).map_err(RepositoryError::from))
            .collect()
    }
}

impl PlatformWriter for DieselRepository {
    fn create_platform(&self, new_platform: &NewPlatform) -> RepositoryResult<Platform> {
        use crate::schema::platforms;

        let mut conn = self.conn()?;
        let insertable: DbNewPlatform = new_platform.into();

        let platform = diesel::insert_into(platforms::table)
            .values(&insertable)
            .returning(DbPlatform::as_returning())
            .get_result::<DbPlatform>(&mut conn)?;

        Platform::try_from(platform).map_err(RepositoryError::from)
    }

    fn update_platform(
        &self,
        id: PlatformId,
        updates: &NewPlatform,
    ) -> RepositoryResult<Platform> {
        use crate::schema::platforms;

        let mut conn = self.conn()?;
        let changeset: DbNewPlatform = updates.into();

        let platform = diesel::update(platforms::table.find(id.get()))
            .set(&changeset)
            .returning(DbPlatform::as_returning())
            .get_result::<DbPlatform>(&mut conn)?;

        Platform::try_from(platform).map_err(RepositoryError::from)
    }

    fn delete_platform(&self, id: PlatformId) -> RepositoryResult<()> {
        use crate::schema::platforms;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(platforms::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
