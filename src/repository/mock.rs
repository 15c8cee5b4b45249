//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::game::{Game, GameFindOptions, NewGame, UpdateGame};
use crate::domain::platform::{NewPlatform, Platform, PlatformFindOptions};
use crate::domain::tag::{NewTag, Tag, TagFindOptions};
use crate::domain::types::{GameId, PlatformId, TagId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    GameReader, GameWriter, PlatformReader, PlatformWriter, TagReader, TagWriter,
};

mock! {
    pub Repository {}

    impl GameReader for Repository {
        fn get_game_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>>;
        fn list_games(&self, options: &GameFindOptions) -> RepositoryResult<Vec<Game>>;
    }

    impl GameWriter for Repository {
        fn create_game(&self, new_game: &NewGame) -> RepositoryResult<Game>;
        fn update_game(&self, id: GameId, updates: &UpdateGame) -> RepositoryResult<Game>;
        fn delete_game(&self, id: GameId) -> RepositoryResult<()>;
    }

    impl TagReader for Repository {
        fn get_tag_by_id(&self, id: TagId) -> RepositoryResult<Option<Tag>>;
        fn list_tags(&self, options: &TagFindOptions) -> RepositoryResult<Vec<Tag>>;
    }

    impl TagWriter for Repository {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, id: TagId, updates: &NewTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, id: TagId) -> RepositoryResult<()>;
    }

    impl PlatformReader for Repository {
        fn get_platform_by_id(&self, id: PlatformId) -> RepositoryResult<Option<Platform>>;
        fn list_platforms(&self, options: &PlatformFindOptions) -> RepositoryResult<Vec<Platform>>;
    }

    impl PlatformWriter for Repository {
        fn create_platform(&self, new_platform: &NewPlatform) -> RepositoryResult<Platform>;
        fn update_platform(
            &self,
            id: PlatformId,
            updates: &NewPlatform,
        ) -> RepositoryResult<Platform>;
        fn delete_platform(&self, id: PlatformId) -> RepositoryResult<()>;
    }
}
