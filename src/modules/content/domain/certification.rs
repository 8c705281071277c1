use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::validation::{require, require_https, FieldError};
use crate::modules::content::domain::{dates, ContentDraft, ContentRecord};
use crate::modules::store::application::ports::outgoing::document_store::{
    Collection, Direction,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub name: String,
    pub institution: String,
    pub issued_date: DateTime<Utc>,
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub certificate_number: String,
    #[serde(default)]
    pub verification_url: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

impl CertificationRecord {
    /// Expired once the expiry date has passed. Certifications
    /// without one never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < now)
    }
}

impl ContentRecord for CertificationRecord {
    const COLLECTION: Collection = Collection::Certifications;
    const ORDER_FIELD: &'static str = "issuedDate";
    const ORDER_DIRECTION: Direction = Direction::Descending;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationForm {
    pub name: String,
    pub institution: String,
    pub issued_date: String,
    pub expiry_date: String,
    pub certificate_number: String,
    pub verification_url: String,
    pub description: String,
}

impl CertificationForm {
    pub fn from_record(record: &CertificationRecord) -> Self {
        Self {
            name: record.name.clone(),
            institution: record.institution.clone(),
            issued_date: dates::day_string(record.issued_date),
            expiry_date: record.expiry_date.map(dates::day_string).unwrap_or_default(),
            certificate_number: record.certificate_number.clone(),
            verification_url: record.verification_url.clone(),
            description: record.description.clone(),
        }
    }
}

impl ContentDraft for CertificationForm {
    type Record = CertificationRecord;

    fn normalize(self, _existing: Option<&CertificationRecord>) -> Result<CertificationRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require(&mut errors, "name", &self.name).to_string();
        let institution = require(&mut errors, "institution", &self.institution).to_string();

        let issued_date = if self.issued_date.trim().is_empty() {
            errors.push(FieldError::new("issuedDate", "validation.required"));
            None
        } else {
            let parsed = dates::parse_day(self.issued_date.trim());
            if parsed.is_none() {
                errors.push(FieldError::new("issuedDate", "validation.invalid_date"));
            }
            parsed
        };

        // Expiry is optional; absent means the credential never
        // expires. When present it must parse and not precede issue.
        let expiry_date = if self.expiry_date.trim().is_empty() {
            None
        } else {
            let parsed = dates::parse_day(self.expiry_date.trim());
            if parsed.is_none() {
                errors.push(FieldError::new("expiryDate", "validation.invalid_date"));
            }
            parsed
        };

        if let (Some(issued), Some(expires)) = (issued_date, expiry_date) {
            if issued > expires {
                errors.push(FieldError::new("expiryDate", "validation.end_before_start"));
            }
        }

        let description = require(&mut errors, "description", &self.description).to_string();

        let verification_url = self.verification_url.trim().to_string();
        if !verification_url.is_empty() {
            require_https(&mut errors, "verificationUrl", &verification_url);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CertificationRecord {
            name,
            institution,
            issued_date: issued_date.unwrap_or_default(),
            expiry_date,
            certificate_number: self.certificate_number.trim().to_string(),
            verification_url,
            description,
            updated_at: Utc::now(),
        })
    }
}
