use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::validation::{require, FieldError};
use crate::modules::content::domain::{ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

/// Software categories the admin can file a skill under.
pub const SKILL_CATEGORIES: [&str; 7] = [
    "BIM Software",
    "CAD Software",
    "Modelado 3D",
    "Render & Visualización",
    "Gestión de Proyectos",
    "Diseño Urbano",
    "Software de Oficina",
];

pub const MIN_PROFICIENCY: u8 = 1;
pub const MAX_PROFICIENCY: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: String,
    pub category: String,
    pub proficiency: u8,
    pub years_of_experience: u32,
    /// Zero-based display position, rewritten wholesale on reorder.
    #[serde(default)]
    pub order: i64,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord for SkillRecord {
    const COLLECTION: Collection = Collection::Skills;
    const ORDER_FIELD: &'static str = "order";
    const ORDER_DIRECTION: Direction = Direction::Ascending;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    pub proficiency: u8,
    pub years_of_experience: i64,
}

impl SkillForm {
    pub fn from_record(record: &SkillRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            proficiency: record.proficiency,
            years_of_experience: i64::from(record.years_of_experience),
        }
    }
}

impl ContentDraft for SkillForm {
    type Record = SkillRecord;

    fn normalize(self, existing: Option<&SkillRecord>) -> Result<SkillRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require(&mut errors, "name", &self.name).to_string();

        let category = self.category.trim().to_string();
        if category.is_empty() {
            errors.push(FieldError::new("category", "validation.required"));
        } else if !SKILL_CATEGORIES.contains(&category.as_str()) {
            errors.push(FieldError::new("category", "validation.unknown_category"));
        }

        if !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&self.proficiency) {
            errors.push(FieldError::new("proficiency", "validation.proficiency_range"));
        }

        if self.years_of_experience < 0 {
            errors.push(FieldError::new("yearsOfExperience", "validation.years_negative"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SkillRecord {
            name,
            category,
            proficiency: self.proficiency,
            years_of_experience: self.years_of_experience as u32,
            // New skills start at order 0; a reorder assigns real
            // positions. Edits keep their slot.
            order: existing.map(|r| r.order).unwrap_or(0),
            updated_at: Utc::now(),
        })
    }
}
