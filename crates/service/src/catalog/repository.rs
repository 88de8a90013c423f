use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CompanyInfo, Contact, Project, Service, StatusCheck, Testimonial};
use crate::errors::ServiceError;

/// Persistence seam for the catalog collections.
///
/// Ordering contract for implementors:
/// - contacts, projects and testimonials come back newest `created_at` first;
/// - services ascend by `order`, ties in a stable order;
/// - every list returns at most `limit` records.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Persist a contact and return the id the store acknowledged.
    async fn insert_contact(&self, contact: &Contact) -> Result<Uuid, ServiceError>;
    async fn list_contacts(&self, limit: u64) -> Result<Vec<Contact>, ServiceError>;

    /// `category` of `None` means every project; otherwise exact match.
    async fn list_projects(&self, category: Option<&str>, limit: u64) -> Result<Vec<Project>, ServiceError>;
    async fn list_services(&self, limit: u64) -> Result<Vec<Service>, ServiceError>;
    async fn list_active_testimonials(&self, limit: u64) -> Result<Vec<Testimonial>, ServiceError>;
    async fn find_company(&self) -> Result<Option<CompanyInfo>, ServiceError>;

    /// Drop every stored record of the collection and store `records` instead.
    async fn replace_projects(&self, records: Vec<Project>) -> Result<u64, ServiceError>;
    async fn replace_services(&self, records: Vec<Service>) -> Result<u64, ServiceError>;
    async fn replace_testimonials(&self, records: Vec<Testimonial>) -> Result<u64, ServiceError>;

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<Uuid, ServiceError>;
    async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Collections {
        contacts: Vec<Contact>,
        projects: Vec<Project>,
        services: Vec<Service>,
        testimonials: Vec<Testimonial>,
        company: Option<CompanyInfo>,
        status_checks: Vec<StatusCheck>,
    }

    #[derive(Default)]
    pub struct MemoryCatalogRepository {
        inner: RwLock<Collections>,
    }

    impl MemoryCatalogRepository {
        pub fn new() -> Self { Self::default() }

        /// Store the company record directly; the catalog API never writes it.
        pub async fn put_company(&self, info: CompanyInfo) {
            self.inner.write().await.company = Some(info);
        }

        /// Append a testimonial as-is, including inactive ones.
        pub async fn push_testimonial(&self, record: Testimonial) {
            self.inner.write().await.testimonials.push(record);
        }

        pub async fn push_project(&self, record: Project) {
            self.inner.write().await.projects.push(record);
        }

        pub async fn push_service(&self, record: Service) {
            self.inner.write().await.services.push(record);
        }

        /// Raw count per collection, ignoring every filter.
        pub async fn counts(&self) -> (usize, usize, usize, usize) {
            let c = self.inner.read().await;
            (c.contacts.len(), c.projects.len(), c.services.len(), c.testimonials.len())
        }
    }

    /// Newest first; later inserts win ties.
    fn newest_first<T: Clone, F>(items: &[T], created_at: F, limit: u64) -> Vec<T>
    where
        F: Fn(&T) -> chrono::DateTime<chrono::Utc>,
    {
        let mut out: Vec<T> = items.iter().rev().cloned().collect();
        out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
        out.truncate(limit as usize);
        out
    }

    #[async_trait]
    impl CatalogRepository for MemoryCatalogRepository {
        async fn insert_contact(&self, contact: &Contact) -> Result<Uuid, ServiceError> {
            let mut c = self.inner.write().await;
            c.contacts.push(contact.clone());
            Ok(contact.id)
        }

        async fn list_contacts(&self, limit: u64) -> Result<Vec<Contact>, ServiceError> {
            let c = self.inner.read().await;
            Ok(newest_first(&c.contacts, |r| r.created_at, limit))
        }

        async fn list_projects(&self, category: Option<&str>, limit: u64) -> Result<Vec<Project>, ServiceError> {
            let c = self.inner.read().await;
            let matching: Vec<Project> = c
                .projects
                .iter()
                .filter(|p| category.map_or(true, |cat| p.category == cat))
                .cloned()
                .collect();
            Ok(newest_first(&matching, |r| r.created_at, limit))
        }

        async fn list_services(&self, limit: u64) -> Result<Vec<Service>, ServiceError> {
            let c = self.inner.read().await;
            let mut out = c.services.clone();
            out.sort_by_key(|s| s.order);
            out.truncate(limit as usize);
            Ok(out)
        }

        async fn list_active_testimonials(&self, limit: u64) -> Result<Vec<Testimonial>, ServiceError> {
            let c = self.inner.read().await;
            let active: Vec<Testimonial> = c.testimonials.iter().filter(|t| t.active).cloned().collect();
            Ok(newest_first(&active, |r| r.created_at, limit))
        }

        async fn find_company(&self) -> Result<Option<CompanyInfo>, ServiceError> {
            Ok(self.inner.read().await.company.clone())
        }

        async fn replace_projects(&self, records: Vec<Project>) -> Result<u64, ServiceError> {
            let n = records.len() as u64;
            self.inner.write().await.projects = records;
            Ok(n)
        }

        async fn replace_services(&self, records: Vec<Service>) -> Result<u64, ServiceError> {
            let n = records.len() as u64;
            self.inner.write().await.services = records;
            Ok(n)
        }

        async fn replace_testimonials(&self, records: Vec<Testimonial>) -> Result<u64, ServiceError> {
            let n = records.len() as u64;
            self.inner.write().await.testimonials = records;
            Ok(n)
        }

        async fn insert_status_check(&self, check: &StatusCheck) -> Result<Uuid, ServiceError> {
            self.inner.write().await.status_checks.push(check.clone());
            Ok(check.id)
        }

        async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>, ServiceError> {
            let c = self.inner.read().await;
            Ok(c.status_checks.iter().take(limit as usize).cloned().collect())
        }
    }
}
