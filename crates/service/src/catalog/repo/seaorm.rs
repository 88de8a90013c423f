use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use uuid::Uuid;

use models::{company, contact, project, service, status_check, testimonial};

use crate::catalog::domain::{CompanyInfo, Contact, Project, Service, StatusCheck, Testimonial};
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository over the shared connection pool.
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn contact_from_model(m: contact::Model) -> Contact {
    Contact {
        id: m.id,
        name: m.name,
        company: m.company,
        email: m.email,
        phone: m.phone,
        industry: m.industry,
        message: m.message,
        created_at: m.created_at.with_timezone(&Utc),
        status: m.status,
    }
}

fn project_from_model(m: project::Model) -> Project {
    Project {
        id: m.id,
        title: m.title,
        category: m.category,
        image: m.image,
        description: m.description,
        created_at: m.created_at.with_timezone(&Utc),
        featured: m.featured,
    }
}

fn service_from_model(m: service::Model) -> Service {
    Service { id: m.id, title: m.title, description: m.description, icon: m.icon, order: m.order }
}

fn testimonial_from_model(m: testimonial::Model) -> Testimonial {
    Testimonial {
        id: m.id,
        quote: m.quote,
        author: m.author,
        position: m.position,
        company: m.company,
        created_at: m.created_at.with_timezone(&Utc),
        active: m.active,
    }
}

fn company_from_model(m: company::Model) -> Result<CompanyInfo, ServiceError> {
    let social: BTreeMap<String, String> = serde_json::from_value(m.social)
        .map_err(|e| ServiceError::Storage(format!("company.social is not a string map: {e}")))?;
    Ok(CompanyInfo {
        name: m.name,
        description: m.description,
        email: m.email,
        phone: m.phone,
        address: m.address,
        social,
    })
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn insert_contact(&self, c: &Contact) -> Result<Uuid, ServiceError> {
        let am = contact::ActiveModel {
            id: Set(c.id),
            name: Set(c.name.clone()),
            company: Set(c.company.clone()),
            email: Set(c.email.clone()),
            phone: Set(c.phone.clone()),
            industry: Set(c.industry.clone()),
            message: Set(c.message.clone()),
            created_at: Set(c.created_at.into()),
            status: Set(c.status.clone()),
        };
        Ok(contact::insert(&self.db, am).await?)
    }

    async fn list_contacts(&self, limit: u64) -> Result<Vec<Contact>, ServiceError> {
        let rows = contact::list_recent(&self.db, limit).await?;
        Ok(rows.into_iter().map(contact_from_model).collect())
    }

    async fn list_projects(&self, category: Option<&str>, limit: u64) -> Result<Vec<Project>, ServiceError> {
        let rows = project::list(&self.db, category, limit).await?;
        Ok(rows.into_iter().map(project_from_model).collect())
    }

    async fn list_services(&self, limit: u64) -> Result<Vec<Service>, ServiceError> {
        let rows = service::list_ordered(&self.db, limit).await?;
        Ok(rows.into_iter().map(service_from_model).collect())
    }

    async fn list_active_testimonials(&self, limit: u64) -> Result<Vec<Testimonial>, ServiceError> {
        let rows = testimonial::list_active(&self.db, limit).await?;
        Ok(rows.into_iter().map(testimonial_from_model).collect())
    }

    async fn find_company(&self) -> Result<Option<CompanyInfo>, ServiceError> {
        match company::find_first(&self.db).await? {
            Some(m) => Ok(Some(company_from_model(m)?)),
            None => Ok(None),
        }
    }

    async fn replace_projects(&self, records: Vec<Project>) -> Result<u64, ServiceError> {
        let rows = records
            .into_iter()
            .map(|p| project::ActiveModel {
                id: Set(p.id),
                title: Set(p.title),
                category: Set(p.category),
                image: Set(p.image),
                description: Set(p.description),
                created_at: Set(p.created_at.into()),
                featured: Set(p.featured),
            })
            .collect();
        Ok(project::replace_all(&self.db, rows).await?)
    }

    async fn replace_services(&self, records: Vec<Service>) -> Result<u64, ServiceError> {
        let rows = records
            .into_iter()
            .map(|s| service::ActiveModel {
                id: Set(s.id),
                title: Set(s.title),
                description: Set(s.description),
                icon: Set(s.icon),
                order: Set(s.order),
            })
            .collect();
        Ok(service::replace_all(&self.db, rows).await?)
    }

    async fn replace_testimonials(&self, records: Vec<Testimonial>) -> Result<u64, ServiceError> {
        let rows = records
            .into_iter()
            .map(|t| testimonial::ActiveModel {
                id: Set(t.id),
                quote: Set(t.quote),
                author: Set(t.author),
                position: Set(t.position),
                company: Set(t.company),
                created_at: Set(t.created_at.into()),
                active: Set(t.active),
            })
            .collect();
        Ok(testimonial::replace_all(&self.db, rows).await?)
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<Uuid, ServiceError> {
        let am = status_check::ActiveModel {
            id: Set(check.id),
            client_name: Set(check.client_name.clone()),
            timestamp: Set(check.timestamp.into()),
        };
        Ok(status_check::insert(&self.db, am).await?)
    }

    async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>, ServiceError> {
        let rows = status_check::list(&self.db, limit).await?;
        Ok(rows
            .into_iter()
            .map(|m| StatusCheck { id: m.id, client_name: m.client_name, timestamp: m.timestamp.with_timezone(&Utc) })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn company_model(social: serde_json::Value) -> company::Model {
        company::Model {
            id: Uuid::new_v4(),
            name: "Exhibilo".into(),
            description: "d".into(),
            email: "info@exhibilo.com".into(),
            phone: "+54".into(),
            address: "Av.".into(),
            social,
        }
    }

    #[test]
    fn company_social_maps_from_json_object() {
        let info = company_from_model(company_model(json!({"linkedin": "https://l", "x": "https://x"}))).unwrap();
        assert_eq!(info.social.len(), 2);
        assert_eq!(info.social["x"], "https://x");
    }

    #[test]
    fn company_social_with_wrong_shape_is_a_storage_error() {
        let err = company_from_model(company_model(json!(["not", "a", "map"]))).unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[test]
    fn timestamps_normalize_to_utc() {
        let at = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00-03:00").unwrap();
        let p = project_from_model(project::Model {
            id: Uuid::new_v4(),
            title: "t".into(),
            category: "Retail".into(),
            image: "i".into(),
            description: "d".into(),
            created_at: at,
            featured: true,
        });
        assert_eq!(p.created_at.to_rfc3339(), "2024-05-01T15:00:00+00:00");
    }
}
