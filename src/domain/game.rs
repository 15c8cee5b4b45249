use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{EntityName, GameId};
use crate::query::{FindOptions, Identified, sort_fields};

sort_fields! {
    /// Columns a game listing can be ordered by.
    pub enum GameSortField {
        Id => "id",
        Name => "name",
    }
}

/// Resolved listing options for games.
pub type GameFindOptions = FindOptions<GameSortField>;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: EntityName,
    pub summary: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Identified for Game {
    fn identifier(&self) -> i64 {
        self.id.get()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewGame {
    pub name: EntityName,
    pub summary: Option<String>,
}

impl NewGame {
    #[must_use]
    pub fn new(name: EntityName, summary: Option<String>) -> Self {
        Self {
            name,
            summary: normalize_summary(summary),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateGame {
    pub name: EntityName,
    /// Replaces the stored summary; `None` clears it.
    pub summary: Option<String>,
}

impl UpdateGame {
    #[must_use]
    pub fn new(name: EntityName, summary: Option<String>) -> Self {
        Self {
            name,
            summary: normalize_summary(summary),
        }
    }
}

fn normalize_summary(summary: Option<String>) -> Option<String> {
    summary
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
