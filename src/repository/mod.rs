//! Storage traits and their Diesel implementation.
//!
//! Listing methods take resolved [`FindOptions`](crate::query::FindOptions)
//! and return the matching items in a stable order; they know nothing about
//! continuation descriptors.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::game::{Game, GameFindOptions, NewGame, UpdateGame};
use crate::domain::platform::{NewPlatform, Platform, PlatformFindOptions};
use crate::domain::tag::{NewTag, Tag, TagFindOptions};
use crate::domain::types::{GameId, PlatformId, TagId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod game;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod platform;
pub mod tag;

/// Applies a [`Pagination`](crate::query::Pagination) window to a boxed
/// Diesel query. Seek windows filter on `$id`.
macro_rules! apply_window {
    ($query:expr, $id:expr, $pagination:expr) => {
        match $pagination {
            $crate::query::Pagination::All => $query,
            $crate::query::Pagination::Page { limit, offset } => {
                $query.limit(limit).offset(offset.max(0))
            }
            $crate::query::Pagination::Seek { last_id, count } => {
                $query.filter($id.gt(last_id)).limit(count)
            }
        }
    };
}

pub(crate) use apply_window;

/// Diesel-backed repository over a pooled SQLite database.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait GameReader {
    fn get_game_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>>;
    fn list_games(&self, options: &GameFindOptions) -> RepositoryResult<Vec<Game>>;
}

pub trait GameWriter {
    fn create_game(&self, new_game: &NewGame) -> RepositoryResult<Game>;
    fn update_game(&self, id: GameId, updates: &UpdateGame) -> RepositoryResult<Game>;
    fn delete_game(&self, id: GameId) -> RepositoryResult<()>;
}

pub trait TagReader {
    fn get_tag_by_id(&self, id: TagId) -> RepositoryResult<Option<Tag>>;
    fn list_tags(&self, options: &TagFindOptions) -> RepositoryResult<Vec<Tag>>;
}

pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, id: TagId, updates: &NewTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, id: TagId) -> RepositoryResult<()>;
}

pub trait PlatformReader {
    fn get_platform_by_id(&self, id: PlatformId) -> RepositoryResult<Option<Platform>>;
    fn list_platforms(&self, options: &PlatformFindOptions) -> RepositoryResult<Vec<Platform>>;
}

pub trait PlatformWriter {
    fn create_platform(&self, new_platform: &NewPlatform) -> RepositoryResult<Platform>;
    fn update_platform(&self, id: PlatformId, updates: &NewPlatform)
    -> RepositoryResult<Platform>;
    fn delete_platform(&self, id: PlatformId) -> RepositoryResult<()>;
}
