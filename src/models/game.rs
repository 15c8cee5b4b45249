use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::game::{
    Game as DomainGame, NewGame as DomainNewGame, UpdateGame as DomainUpdateGame,
};
use crate::domain::types::{EntityName, GameId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::game::Game`].
pub struct Game {
    pub id: i64,
    pub name: String,
    pub summary: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::games)]
/// Insertable form of [`Game`].
pub struct NewGame<'a> {
    pub name: &'a str,
    pub summary: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::games)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Game`] record.
pub struct UpdateGame<'a> {
    pub name: &'a str,
    pub summary: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Game> for DomainGame {
    type Error = TypeConstraintError;

    fn try_from(game: Game) -> Result<Self, Self::Error> {
        Ok(Self {
            id: GameId::new(game.id)?,
            name: EntityName::new(game.name)?,
            summary: game.summary,
            created_at: game.created_at,
            updated_at: game.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewGame> for NewGame<'a> {
    fn from(game: &'a DomainNewGame) -> Self {
        Self {
            name: game.name.as_str(),
            summary: game.summary.as_deref(),
        }
    }
}

impl<'a> UpdateGame<'a> {
    /// Builds the changeset, stamping `updated_at` with `now`.
    pub fn new(game: &'a DomainUpdateGame, now: NaiveDateTime) -> Self {
        Self {
            name: game.name.as_str(),
            summary: game.summary.as_deref(),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_newgame() {
        let domain = DomainNewGame::new(
            EntityName::new("Doom").unwrap(),
            Some("Demons".to_string()),
        );
        let new: NewGame = (&domain).into();
        assert_eq!(new.name, "Doom");
        assert_eq!(new.summary, Some("Demons"));
    }

    #[test]
    fn game_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_game = Game {
            id: 4,
            name: "Myst".to_string(),
            summary: None,
            created_at: now,
            updated_at: now,
        };
        let domain = DomainGame::try_from(db_game).unwrap();
        assert_eq!(domain.id.get(), 4);
        assert_eq!(domain.name.as_str(), "Myst");
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn invalid_row_is_rejected() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_game = Game {
            id: 0,
            name: "Myst".to_string(),
            summary: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(
            DomainGame::try_from(db_game),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
