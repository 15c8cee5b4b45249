//! Repository implementation for games.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::game::{Game, GameFindOptions, GameSortField, NewGame, UpdateGame};
use crate::domain::types::GameId;
use crate::models::game::{Game as DbGame, NewGame as DbNewGame, UpdateGame as DbUpdateGame};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, GameReader, GameWriter, apply_window};

impl GameReader for DieselRepository {
    fn get_game_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>> {
        use crate::schema::games;

        let mut conn = self.conn()?;
        let game = games::table
            .find(id.get())
            .select(DbGame::as_select())
            .first::<DbGame>(&mut conn)
            .optional()?;

        game.map(Game::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_games(&self, options: &GameFindOptions) -> RepositoryResult<Vec<Game>> {
        use crate::schema::games;

        let mut conn = self.conn()?;

        let query = games::table.select(DbGame::as_select()).into_boxed();
        let query = apply_window!(query, games::id, options.pagination());

        let order = options.order();
        let query = match (order.field(), order.is_descending()) {
            (GameSortField::Id, false) => query.order(games::id.asc()),
            (GameSortField::Id, true) => query.order(games::id.desc()),
            (GameSortField::Name, false) => query.order((games::name.asc(), games::id.asc())),
            (GameSortField::Name, true) => query.order((games::name.desc(), games::id.desc())),
        };

        query
            .load::<DbGame>(&mut conn)?
            .into_iter()
            .map(|game| Game::try_from(game).map_err(RepositoryError::from))
            .collect()
    }
}

impl GameWriter for DieselRepository {
    fn create_game(&self, new_game: &NewGame) -> RepositoryResult<Game> {
        use crate::schema::games;

        let mut conn = self.conn()?;
        let insertable: DbNewGame = new_game.into();

        let game = diesel::insert_into(games::table)
            .values(&insertable)
            .returning(DbGame::as_returning())
            .get_result::<DbGame>(&mut conn)?;

        Game::try_from(game).map_err(RepositoryError::from)
    }

    fn update_game(&self, id: GameId, updates: &UpdateGame) -> RepositoryResult<Game> {
        use crate::schema::games;

        let mut conn = self.conn()?;
        let changeset = DbUpdateGame::new(updates, Utc::now().naive_utc());

        let game = diesel::update(games::table.find(id.get()))
            .set(&changeset)
            .returning(DbGame::as_returning())
            .get_result::<DbGame>(&mut conn)?;

        Game::try_from(game).map_err(RepositoryError::from)
    }

    fn delete_game(&self, id: GameId) -> RepositoryResult<()> {
        use crate::schema::games;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(games::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
