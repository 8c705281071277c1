use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::images::validate_image;
use crate::modules::content::domain::validation::{is_basic_email, require, require_https, FieldError};
use crate::modules::content::domain::{ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

/// Fixed document id of the singleton profile record.
pub const PERSONAL_DOC_ID: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    pub objective: String,
    #[serde(default)]
    pub profile_image: String,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for PersonalRecord {
    const COLLECTION: Collection = Collection::Personal;
    const ORDER_FIELD: &'static str = "updatedAt";
    const ORDER_DIRECTION: Direction = Direction::Descending;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalForm {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub objective: String,
    pub profile_image: String,
}

impl PersonalForm {
    pub fn from_record(record: &PersonalRecord) -> Self {
        Self {
            name: record.name.clone(),
            title: record.title.clone(),
            location: record.location.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            linkedin: record.linkedin.clone(),
            objective: record.objective.clone(),
            profile_image: record.profile_image.clone(),
        }
    }
}

impl ContentDraft for PersonalForm {
    type Record = PersonalRecord;

    fn normalize(self, _existing: Option<&PersonalRecord>) -> Result<PersonalRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require(&mut errors, "name", &self.name).to_string();
        let title = require(&mut errors, "title", &self.title).to_string();
        let location = require(&mut errors, "location", &self.location).to_string();
        let objective = require(&mut errors, "objective", &self.objective).to_string();

        let email = require(&mut errors, "email", &self.email).to_string();
        if !email.is_empty() && !is_basic_email(&email) {
            errors.push(FieldError::new("email", "validation.invalid_email"));
        }

        let linkedin = self.linkedin.trim().to_string();
        if !linkedin.is_empty() {
            require_https(&mut errors, "linkedin", &linkedin);
        }

        // Either a data-URL photo within the size cap or an external URL.
        let profile_image = self.profile_image.trim().to_string();
        if !profile_image.is_empty() {
            if let Err(err) = validate_image(&profile_image) {
                errors.push(FieldError::new("profileImage", err.message_key()));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PersonalRecord {
            name,
            title,
            location,
            email,
            phone: self.phone.trim().to_string(),
            linkedin,
            objective,
            profile_image,
            updated_at: Utc::now(),
        })
    }
}
