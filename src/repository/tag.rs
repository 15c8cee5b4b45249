//! Repository implementation for tags.

use diesel::prelude::*;

use crate::domain::tag::{NewTag, Tag, TagFindOptions, TagSortField};
use crate::domain::types::TagId;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader, TagWriter, apply_window};

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, id: TagId) -> RepositoryResult<Option<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .find(id.get())
            .select(DbTag::as_select())
            .first::<DbTag>(&mut conn)
            .optional()?;

        tag.map(Tag::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_tags(&self, options: &TagFindOptions) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let query = tags::table.select(DbTag::as_select()).into_boxed();
        let query = apply_window!(query, tags::id, options.pagination());

        let order = options.order();
        let query = match (order.field(), order.is_descending()) {
            (TagSortField::Id, false) => query.order(tags::id.asc()),
            (TagSortField::Id, true) => query.order(tags::id.desc()),
            (TagSortField::Name, false) => query.order((tags::name.asc(), tags::id.asc())),
            (TagSortField::Name, true) => query.order((tags::name.desc(), tags::id.desc())),
        };

        query
            .load::<DbTag>(&mut conn)?
            .into_iter()
            .map(|tag| Tag::try_from(tag).map_err(RepositoryError::from))
            .collect()
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable: DbNewTag = new_tag.into();

        let tag = diesel::insert_into(tags::table)
            .values(&insertable)
            .returning(DbTag::as_returning())
            .get_result::<DbTag>(&mut conn)?;

        Tag::try_from(tag).map_err(RepositoryError::from)
    }

    fn update_tag(&self, id: TagId, updates: &NewTag) -> RepositoryResult<Tag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let changeset: DbNewTag = updates.into();

        let tag = diesel::update(tags::table.find(id.get()))
            .set(&changeset)
            .returning(DbTag::as_returning())
            .get_result::<DbTag>(&mut conn)?;

        Tag::try_from(tag).map_err(RepositoryError::from)
    }

    fn delete_tag(&self, id: TagId) -> RepositoryResult<()> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(tags::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
