use serde::Deserialize;
use validator::Validate;

use crate::domain::game::{NewGame, UpdateGame};
use crate::domain::types::EntityName;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /games` and `PUT /games/{id}`.
pub struct GameForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 4096))]
    #[serde(default)]
    pub summary: Option<String>,
}

impl GameForm {
    fn parts(self) -> Result<(EntityName, Option<String>), FormError> {
        self.validate()?;
        let name = EntityName::new(&self.name).map_err(FormError::InvalidName)?;
        Ok((name, self.summary))
    }
}

impl TryFrom<GameForm> for NewGame {
    type Error = FormError;

    fn try_from(form: GameForm) -> Result<Self, Self::Error> {
        let (name, summary) = form.parts()?;
        Ok(NewGame::new(name, summary))
    }
}

impl TryFrom<GameForm> for UpdateGame {
    type Error = FormError;

    fn try_from(form: GameForm) -> Result<Self, Self::Error> {
        let (name, summary) = form.parts()?;
        Ok(UpdateGame::new(name, summary))
    }
}
