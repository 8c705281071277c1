use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::images::{validate_image, MAX_PROJECT_IMAGES};
use crate::modules::content::domain::validation::{require, require_https, FieldError};
use crate::modules::content::domain::{dates, normalize_tags, ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

/// Portfolio categories offered by the admin form. "Other" is the
/// catch-all the original catalog shipped with.
pub const PROJECT_CATEGORIES: [&str; 11] = [
    "Arquitectura Residencial",
    "Arquitectura Comercial",
    "Arquitectura Institucional",
    "Diseño de Interiores",
    "Urbanismo y Paisajismo",
    "Restauración Arquitectónica",
    "Construcción Sustentable",
    "Diseño Arquitectónico",
    "Proyecto Ejecutivo",
    "Consultoría Arquitectónica",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    OnHold,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Completed
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
            Self::OnHold => "on-hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Ordered gallery; the first entry is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub website_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl ContentRecord for ProjectRecord {
    const COLLECTION: Collection = Collection::Projects;
    const ORDER_FIELD: &'static str = "createdAt";
    const ORDER_DIRECTION: Direction = Direction::Descending;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
    pub website_url: String,
    pub category: String,
    pub status: ProjectStatus,
    pub featured: bool,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectForm {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
            images: record.images.clone(),
            demo_url: record.demo_url.clone().unwrap_or_default(),
            repo_url: record.repo_url.clone().unwrap_or_default(),
            website_url: record.website_url.clone().unwrap_or_default(),
            category: record.category.clone(),
            status: record.status,
            featured: record.featured,
            start_date: record.start_date.map(dates::day_string).unwrap_or_default(),
            end_date: record.end_date.map(dates::day_string).unwrap_or_default(),
        }
    }
}

fn optional_https(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    require_https(errors, field, trimmed);
    Some(trimmed.to_string())
}

fn optional_day(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = dates::parse_day(trimmed);
    if parsed.is_none() {
        errors.push(FieldError::new(field, "validation.invalid_date"));
    }
    parsed
}

impl ContentDraft for ProjectForm {
    type Record = ProjectRecord;

    fn normalize(self, existing: Option<&ProjectRecord>) -> Result<ProjectRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = require(&mut errors, "title", &self.title).to_string();
        let description = require(&mut errors, "description", &self.description).to_string();

        let category = self.category.trim().to_string();
        if category.is_empty() {
            errors.push(FieldError::new("category", "validation.required"));
        } else if !PROJECT_CATEGORIES.contains(&category.as_str()) {
            errors.push(FieldError::new("category", "validation.unknown_category"));
        }

        let demo_url = optional_https(&mut errors, "demoUrl", &self.demo_url);
        let repo_url = optional_https(&mut errors, "repoUrl", &self.repo_url);
        let website_url = optional_https(&mut errors, "websiteUrl", &self.website_url);

        let start_date = optional_day(&mut errors, "startDate", &self.start_date);
        let end_date = optional_day(&mut errors, "endDate", &self.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                errors.push(FieldError::new("endDate", "validation.end_before_start"));
            }
        }

        // The gallery cap is checked before the images are inspected
        // one by one; an over-long list fails fast with a single error.
        if self.images.len() > MAX_PROJECT_IMAGES {
            errors.push(FieldError::new("images", "validation.too_many_images"));
        } else {
            for image in &self.images {
                if let Err(err) = validate_image(image) {
                    errors.push(FieldError::new("images", err.message_key()));
                    break;
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let now = Utc::now();
        Ok(ProjectRecord {
            title,
            description,
            technologies: normalize_tags(self.technologies),
            images: self.images,
            demo_url,
            repo_url,
            website_url,
            category,
            status: self.status,
            featured: self.featured,
            start_date,
            end_date,
            // createdAt is set once and survives every later save.
            created_at: existing.map(|r| r.created_at).unwrap_or(now),
            updated_at: now,
        })
    }
}
