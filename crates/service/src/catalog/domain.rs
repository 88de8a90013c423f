use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "Todos";

/// Status assigned to every new contact.
pub const CONTACT_STATUS_NEW: &str = "new";

/// Contact form payload as received. Fields are optional here so that a
/// missing field is reported next to the malformed ones instead of failing
/// deserialization on the first gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub message: Option<String>,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    pub message: String,
}

impl ContactInput {
    /// Check every field and collect all problems before giving up.
    pub fn validate(self) -> Result<ContactSubmission, ValidationError> {
        let mut errors = ValidationError::default();

        let name = required(&mut errors, "name", self.name);
        let company = required(&mut errors, "company", self.company);
        let industry = required(&mut errors, "industry", self.industry);
        let message = required(&mut errors, "message", self.message);
        let email = match self.email {
            None => {
                errors.push("email", "field required");
                String::new()
            }
            Some(email) => {
                if let Err(models::errors::ModelError::Validation(msg)) =
                    models::validation::validate_email(&email)
                {
                    errors.push("email", msg);
                }
                email
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission { name, company, email, phone: self.phone, industry, message })
    }
}

fn required(errors: &mut ValidationError, field: &str, value: Option<String>) -> String {
    match value {
        None => {
            errors.push(field, "field required");
            String::new()
        }
        Some(v) => {
            if models::validation::validate_required(&v).is_err() {
                errors.push(field, "must not be empty");
            }
            v
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl Contact {
    /// Stamp a validated submission with a fresh id, `now` and status `new`.
    pub fn from_submission(submission: ContactSubmission, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            company: submission.company,
            email: submission.email,
            phone: submission.phone,
            industry: submission.industry,
            message: submission.message,
            created_at: now,
            status: CONTACT_STATUS_NEW.to_string(),
        }
    }
}

/// Result of an accepted contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub contact_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub quote: String,
    pub author: String,
    pub position: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool { true }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Platform name to profile URL.
    pub social: BTreeMap<String, String>,
}

impl CompanyInfo {
    /// Served when no company record has been stored. Never written back.
    pub fn fallback() -> Self {
        let social = [
            ("linkedin", "https://linkedin.com/company/exhibilo"),
            ("instagram", "https://instagram.com/exhibilo"),
            ("facebook", "https://facebook.com/exhibilo"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            name: "Exhibilo".into(),
            description: "Especialistas en diseño y producción de exhibidores, puntos de venta y soluciones para retail.".into(),
            email: "info@exhibilo.com".into(),
            phone: "+54 11 4567-8900".into(),
            address: "Av. Industrial 1234, Buenos Aires, Argentina".into(),
            social,
        }
    }
}

/// Map the raw `category` query value to a store filter.
/// Absent or [`ALL_CATEGORIES`] means no filter; anything else matches exactly.
pub fn category_filter(category: Option<&str>) -> Option<&str> {
    match category {
        None | Some(ALL_CATEGORIES) => None,
        Some(c) => Some(c),
    }
}

/// Legacy status-check payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusCheckInput {
    pub client_name: Option<String>,
}

impl StatusCheckInput {
    pub fn validate(self) -> Result<String, ValidationError> {
        match self.client_name {
            Some(name) => Ok(name),
            None => {
                let mut errors = ValidationError::default();
                errors.push("client_name", "field required");
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}
