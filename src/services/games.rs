use crate::domain::game::{Game, GameSortField, NewGame, UpdateGame};
use crate::domain::types::GameId;
use crate::forms::game::GameForm;
use crate::query::{ListResponse, QueryParams};
use crate::repository::{GameReader, GameWriter};
use crate::services::{ServiceError, ServiceResult, list_resource};

/// Lists games windowed and ordered as requested by `params`.
pub fn list_games<R>(repo: &R, params: &QueryParams) -> ServiceResult<ListResponse<Game>>
where
    R: GameReader + ?Sized,
{
    list_resource::<GameSortField, _, _>(params, |options| {
        repo.list_games(options).map_err(|err| {
            log::error!("Failed to list games: {err}");
            err
        })
    })
}

/// Fetches a single game or fails with [`ServiceError::NotFound`].
pub fn get_game<R>(repo: &R, id: i64) -> ServiceResult<Game>
where
    R: GameReader + ?Sized,
{
    let id = GameId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.get_game_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new game.
pub fn create_game<R>(repo: &R, form: GameForm) -> ServiceResult<Game>
where
    R: GameWriter + ?Sized,
{
    let new_game = NewGame::try_from(form).map_err(|err| {
        log::error!("Failed to validate game form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.create_game(&new_game).map_err(|err| {
        log::error!("Failed to create game: {err}");
        ServiceError::from(err)
    })
}

/// Validates the form and replaces the stored game fields.
pub fn update_game<R>(repo: &R, id: i64, form: GameForm) -> ServiceResult<Game>
where
    R: GameWriter + ?Sized,
{
    let id = GameId::new(id).map_err(|_| ServiceError::NotFound)?;
    let updates = UpdateGame::try_from(form).map_err(|err| {
        log::error!("Failed to validate game form: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.update_game(id, &updates).map_err(|err| {
        log::error!("Failed to update game {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_game<R>(repo: &R, id: i64) -> ServiceResult<()>
where
    R: GameWriter + ?Sized,
{
    let id = GameId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.delete_game(id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::EntityName;
    use crate::query::{OrderSpec, PageCursor, Pagination};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn game(id: i64, name: &str) -> Game {
        let now = Utc::now().naive_utc();
        Game {
            id: GameId::new(id).unwrap(),
            name: EntityName::new(name).unwrap(),
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn page_listing_passes_order_and_window_to_storage() {
        let mut repo = MockRepository::new();
        repo.expect_list_games()
            .withf(|options| {
                options.pagination()
                    == Pagination::Page {
                        limit: 2,
                        offset: 0,
                    }
                    && options.order() == OrderSpec::new(GameSortField::Name, true)
            })
            .times(1)
            .returning(|_| Ok(vec![game(3, "Zork"), game(1, "Myst")]));

        let response = list_games(
            &repo,
            &params(&[
                ("mode", "page"),
                ("limit", "2"),
                ("order", "name"),
                ("desc", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(response.data().len(), 2);
        assert_eq!(
            response.page_cursor(),
            Some(PageCursor {
                limit: 2,
                offset: 2
            })
        );
    }

    #[test]
    fn unknown_order_field_is_invalid_params() {
        let mut repo = MockRepository::new();
        repo.expect_list_games().never();

        let result = list_games(&repo, &params(&[("order", "summary")]));

        assert!(matches!(result, Err(ServiceError::InvalidParams(_))));
    }

    #[test]
    fn storage_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_list_games()
            .returning(|_| Err(RepositoryError::ConnectionError("gone".to_string())));

        let result = list_games(&repo, &QueryParams::new());

        assert!(matches!(result, Err(ServiceError::Internal)));
    }

    #[test]
    fn missing_game_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_game_by_id().returning(|_| Ok(None));

        assert!(matches!(get_game(&repo, 9), Err(ServiceError::NotFound)));
        assert!(matches!(get_game(&repo, 0), Err(ServiceError::NotFound)));
    }

    #[test]
    fn invalid_form_is_rejected_before_storage() {
        let mut repo = MockRepository::new();
        repo.expect_create_game().never();

        let form = GameForm {
            name: String::new(),
            summary: None,
        };

        assert!(matches!(
            create_game(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn update_forwards_normalized_fields() {
        let mut repo = MockRepository::new();
        repo.expect_update_game()
            .withf(|id, updates| id.get() == 5 && updates.summary.is_none())
            .returning(|id, updates| {
                let mut updated = game(id.get(), updates.name.as_str());
                updated.summary = updates.summary.clone();
                Ok(updated)
            });

        let form = GameForm {
            name: "Thief".to_string(),
            summary: Some("  ".to_string()),
        };
        let updated = update_game(&repo, 5, form).unwrap();

        assert_eq!(updated.name.as_str(), "Thief");
        assert_eq!(updated.summary, None);
    }
}
