use crate::domain::platform::{NewPlatform, Platform, PlatformSortField};
use crate::domain::types::PlatformId;
use crate::forms::name::NameForm;
use crate::query::{ListResponse, QueryParams};
use crate::repository::{PlatformReader, PlatformWriter};
use crate::services::{ServiceError, ServiceResult, list_resource};

/// Lists platforms windowed and ordered as requested by `params`.
pub fn list_platforms<R>(repo: &R, params: &QueryParams) -> ServiceResult<ListResponse<Platform>>
where
    R: PlatformReader + ?Sized,
{
    list_resource::<PlatformSortField, _, _>(params, |options| {
        repo.list_platforms(options).map_err(|err| {
            log::error!("Failed to list platforms: {err}");
            err
        })
    })
}

pub fn get_platform<R>(repo: &R, id: i64) -> ServiceResult<Platform>
where
    R: PlatformReader + ?Sized,
{
    let id = PlatformId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.get_platform_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn create_platform<R>(repo: &R, form: NameForm) -> ServiceResult<Platform>
where
    R: PlatformWriter + ?Sized,
{
    let new_platform = NewPlatform::try_from(form).map_err(|err| {
        log::error!("Failed to validate platform form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_platform(&new_platform).map_err(|err| {
        log::error!("Failed to create platform: {err}");
        ServiceError::from(err)
    })
}

pub fn rename_platform<R>(repo: &R, id: i64, form: NameForm) -> ServiceResult<Platform>
where
    R: PlatformWriter + ?Sized,
{
    let id = PlatformId::new(id).map_err(|_| ServiceError::NotFound)?;
    let updates = NewPlatform::try_from(form).map_err(|err| {
        log::error!("Failed to validate platform form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_platform(id, &updates).map_err(|err| {
        log::error!("Failed to rename platform {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_platform<R>(repo: &R, id: i64) -> ServiceResult<()>
where
    R: PlatformWriter + ?Sized,
{
    let id = PlatformId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.delete_platform(id).map_err(ServiceError::from)
}
