use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::validation::{require, FieldError};
use crate::modules::content::domain::{dates, normalize_tags, ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

//
// ──────────────────────────────────────────────────────────
// Stored record
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub position: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for ExperienceRecord {
    const COLLECTION: Collection = Collection::Experiences;
    const ORDER_FIELD: &'static str = "startDate";
    const ORDER_DIRECTION: Direction = Direction::Descending;
}

//
// ──────────────────────────────────────────────────────────
// Form
// ──────────────────────────────────────────────────────────
//

/// Editable shape of the experience form: month-precision date
/// strings, raw technology tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceForm {
    pub position: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

impl ExperienceForm {
    /// Stored timestamps back to the form's editable strings, for
    /// edit-mode prefill.
    pub fn from_record(record: &ExperienceRecord) -> Self {
        Self {
            position: record.position.clone(),
            company: record.company.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
            start_date: dates::month_string(record.start_date),
            end_date: record.end_date.map(dates::month_string).unwrap_or_default(),
            current: record.current,
        }
    }
}

impl ContentDraft for ExperienceForm {
    type Record = ExperienceRecord;

    fn normalize(self, _existing: Option<&ExperienceRecord>) -> Result<ExperienceRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let position = require(&mut errors, "position", &self.position).to_string();
        let company = require(&mut errors, "company", &self.company).to_string();
        let location = require(&mut errors, "location", &self.location).to_string();
        let description = require(&mut errors, "description", &self.description).to_string();

        let start_date = if self.start_date.trim().is_empty() {
            errors.push(FieldError::new("startDate", "validation.required"));
            None
        } else {
            let parsed = dates::parse_month(self.start_date.trim());
            if parsed.is_none() {
                errors.push(FieldError::new("startDate", "validation.invalid_month"));
            }
            parsed
        };

        // An ongoing position has no end date, regardless of what the
        // field contained before the flag was set.
        let end_date = if self.current {
            None
        } else if self.end_date.trim().is_empty() {
            errors.push(FieldError::new("endDate", "validation.required"));
            None
        } else {
            let parsed = dates::parse_month(self.end_date.trim());
            if parsed.is_none() {
                errors.push(FieldError::new("endDate", "validation.invalid_month"));
            }
            parsed
        };

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                errors.push(FieldError::new("endDate", "validation.end_before_start"));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ExperienceRecord {
            position,
            company,
            location,
            description,
            technologies: normalize_tags(self.technologies),
            start_date: start_date.unwrap_or_default(),
            end_date,
            current: self.current,
            updated_at: Utc::now(),
        })
    }
}
