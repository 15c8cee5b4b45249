use serde::Deserialize;
use validator::Validate;

use crate::domain::platform::NewPlatform;
use crate::domain::tag::NewTag;
use crate::domain::types::EntityName;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Body for creating or renaming a tag or platform.
pub struct NameForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl NameForm {
    fn entity_name(self) -> Result<EntityName, FormError> {
        self.validate()?;
        EntityName::new(&self.name).map_err(FormError::InvalidName)
    }
}

impl TryFrom<NameForm> for NewTag {
    type Error = FormError;

    fn try_from(form: NameForm) -> Result<Self, Self::Error> {
        Ok(NewTag::new(form.entity_name()?))
    }
}

impl TryFrom<NameForm> for NewPlatform {
    type Error = FormError;

    fn try_from(form: NameForm) -> Result<Self, Self::Error> {
        Ok(NewPlatform::new(form.entity_name()?))
    }
}
