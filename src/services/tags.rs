use crate::domain::tag::{NewTag, Tag, TagSortField};
use crate::domain::types::TagId;
use crate::forms::name::NameForm;
use crate::query::{ListResponse, QueryParams};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult, list_resource};

/// Lists tags windowed and ordered as requested by `params`.
pub fn list_tags<R>(repo: &R, params: &QueryParams) -> ServiceResult<ListResponse<Tag>>
where
    R: TagReader + ?Sized,
{
    list_resource::<TagSortField, _, _>(params, |options| {
        repo.list_tags(options).map_err(|err| {
            log::error!("Failed to list tags: {err}");
            err
        })
    })
}

pub fn get_tag<R>(repo: &R, id: i64) -> ServiceResult<Tag>
where
    R: TagReader + ?Sized,
{
    let id = TagId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.get_tag_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_tag<R>(repo: &R, form: NameForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = NewTag::try_from(form).map_err(|err| {
        log::error!("Failed to validate tag form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_tag(&new_tag).map_err(|err| {
        log::error!("Failed to create tag: {err}");
        ServiceError::from(err)
    })
}

pub fn rename_tag<R>(repo: &R, id: i64, form: NameForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let id = TagId::new(id).map_err(|_| ServiceError::NotFound)?;
    let updates = NewTag::try_from(form).map_err(|err| {
        log::error!("Failed to validate tag form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_tag(id, &updates).map_err(|err| {
        log::error!("Failed to rename tag {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_tag<R>(repo: &R, id: i64) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    let id = TagId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.delete_tag(id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::EntityName;
    use crate::query::{OrderSpec, Pagination};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id: TagId::new(id).unwrap(),
            name: EntityName::new(name).unwrap(),
        }
    }

    #[test]
    fn listing_without_mode_returns_everything() {
        let mut repo = MockRepository::new();
        repo.expect_list_tags()
            .withf(|options| {
                options.pagination() == Pagination::All
                    && options.order() == OrderSpec::ascending(TagSortField::Name)
            })
            .returning(|_| Ok(vec![tag(2, "co-op"), tag(1, "rpg")]));

        let params: QueryParams = [("order", "name")].into_iter().collect();
        let response = list_tags(&repo, &params).unwrap();

        assert!(matches!(response, ListResponse::All { .. }));
        assert_eq!(response.data().len(), 2);
    }

    #[test]
    fn duplicate_name_is_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_tag().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Unique constraint violation: tags.name".to_string(),
            ))
        });

        let form = NameForm {
            name: "rpg".to_string(),
        };

        assert!(matches!(
            create_tag(&repo, form),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn deleting_missing_tag_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_tag()
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(delete_tag(&repo, 4), Err(ServiceError::NotFound)));
    }
}
