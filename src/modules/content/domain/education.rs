use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::validation::{require, FieldError};
use crate::modules::content::domain::{dates, ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    /// Specialty line under the degree ("Especialidad" in the form).
    pub field: String,
    pub location: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for EducationRecord {
    const COLLECTION: Collection = Collection::Education;
    const ORDER_FIELD: &'static str = "startDate";
    const ORDER_DIRECTION: Direction = Direction::Descending;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationForm {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

impl EducationForm {
    pub fn from_record(record: &EducationRecord) -> Self {
        Self {
            institution: record.institution.clone(),
            degree: record.degree.clone(),
            field: record.field.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            start_date: dates::month_string(record.start_date),
            end_date: record.end_date.map(dates::month_string).unwrap_or_default(),
            current: record.current,
        }
    }
}

impl ContentDraft for EducationForm {
    type Record = EducationRecord;

    fn normalize(self, _existing: Option<&EducationRecord>) -> Result<EducationRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let institution = require(&mut errors, "institution", &self.institution).to_string();
        let degree = require(&mut errors, "degree", &self.degree).to_string();
        let field = require(&mut errors, "field", &self.field).to_string();
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

        Ok(EducationRecord {
            institution,
            degree,
            field,
            location,
            description,
            start_date: start_date.unwrap_or_default(),
            end_date,
            current: self.current,
            updated_at: Utc::now(),
        })
    }
}
