use std::sync::Arc;

use chrono::Utc;
use common::metrics::{record_operation, Outcome};
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use super::domain::{
    category_filter, CompanyInfo, Contact, ContactInput, ContactReceipt, Project, Service, StatusCheck,
    StatusCheckInput, Testimonial,
};
use super::operation::Operation;
use super::repository::CatalogRepository;
use super::seed;
use crate::errors::ServiceError;

/// Record counts written by one reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub projects: u64,
    pub services: u64,
    pub testimonials: u64,
}

/// Catalog business service, independent of the web framework.
///
/// Holds the store handle it was given; no other shared state.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
    list_limit: u64,
}

impl CatalogService {
    /// Cap applied to every list operation unless overridden.
    pub const DEFAULT_LIST_LIMIT: u64 = 1000;

    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo, list_limit: Self::DEFAULT_LIST_LIMIT }
    }

    pub fn with_list_limit(mut self, limit: u64) -> Self {
        self.list_limit = limit.max(1);
        self
    }

    pub fn list_limit(&self) -> u64 { self.list_limit }

    /// Validate and store a contact form submission.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, domain::ContactInput, repository::memory::MemoryCatalogRepository};
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(MemoryCatalogRepository::new()));
    /// let input = ContactInput {
    ///     name: Some("Ana".into()), company: Some("ACME".into()), email: Some("ana@acme.com".into()),
    ///     phone: None, industry: Some("Retail".into()), message: Some("Hola".into()),
    /// };
    /// let receipt = tokio_test::block_on(svc.submit_contact(input)).unwrap();
    /// let contacts = tokio_test::block_on(svc.list_contacts()).unwrap();
    /// assert_eq!(contacts[0].id, receipt.contact_id);
    /// assert_eq!(contacts[0].status, "new");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn submit_contact(&self, input: ContactInput) -> Result<ContactReceipt, ServiceError> {
        let op = Operation::SubmitContact;
        let submission = match input.validate() {
            Ok(s) => s,
            Err(e) => {
                warn!(category = op.label(), fields = %e, "contact rejected");
                record_operation(op.label(), Outcome::Invalid);
                return Err(e.into());
            }
        };

        let contact = Contact::from_submission(submission, Utc::now());
        let result = match self.repo.insert_contact(&contact).await {
            Ok(acked) if acked == contact.id => Ok(ContactReceipt { contact_id: contact.id }),
            Ok(acked) => Err(ServiceError::Storage(format!(
                "write not acknowledged: expected {}, store returned {acked}",
                contact.id
            ))),
            Err(e) => Err(e),
        };
        if let Ok(receipt) = &result {
            info!(contact_id = %receipt.contact_id, industry = %contact.industry, "contact_received");
        }
        self.finish(op, result)
    }

    /// Every contact, newest first, capped at the list limit.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        let result = self.repo.list_contacts(self.list_limit).await;
        self.finish(Operation::ListContacts, result)
    }

    /// Projects newest first. `None` or `"Todos"` returns every category.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, repository::memory::MemoryCatalogRepository};
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(MemoryCatalogRepository::new()));
    /// tokio_test::block_on(svc.seed()).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.list_projects(Some("Todos"))).unwrap().len(), 6);
    /// assert_eq!(tokio_test::block_on(svc.list_projects(Some("Cosmética"))).unwrap().len(), 2);
    /// assert!(tokio_test::block_on(svc.list_projects(Some("NoSuchCategory"))).unwrap().is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, ServiceError> {
        let filter = category_filter(category);
        let result = self.repo.list_projects(filter, self.list_limit).await;
        self.finish(Operation::ListProjects, result)
    }

    /// Services ascending by `order`.
    pub async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        let result = self.repo.list_services(self.list_limit).await.map(|mut services| {
            // stable: ties keep the store's order
            services.sort_by_key(|s| s.order);
            services
        });
        self.finish(Operation::ListServices, result)
    }

    /// Active testimonials only, newest first.
    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ServiceError> {
        let result = self.repo.list_active_testimonials(self.list_limit).await.map(|mut items| {
            items.retain(|t| t.active);
            items
        });
        self.finish(Operation::ListTestimonials, result)
    }

    /// Stored company record, or [`CompanyInfo::fallback`] when none exists.
    pub async fn get_company_info(&self) -> Result<CompanyInfo, ServiceError> {
        let result = self
            .repo
            .find_company()
            .await
            .map(|found| found.unwrap_or_else(CompanyInfo::fallback));
        self.finish(Operation::GetCompanyInfo, result)
    }

    /// Destructive reset of services, projects and testimonials to the seed sets.
    ///
    /// Administrative only. Collections are replaced one at a time; a failure
    /// stops the run and leaves later collections untouched.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<SeedSummary, ServiceError> {
        let result = self.seed_all().await;
        if let Ok(summary) = &result {
            info!(
                projects = summary.projects,
                services = summary.services,
                testimonials = summary.testimonials,
                "database_seeded"
            );
        }
        self.finish(Operation::Seed, result)
    }

    async fn seed_all(&self) -> Result<SeedSummary, ServiceError> {
        let now = Utc::now();
        let services = self.repo.replace_services(seed::services()).await?;
        let projects = self.repo.replace_projects(seed::projects(now)).await?;
        let testimonials = self.repo.replace_testimonials(seed::testimonials(now)).await?;
        Ok(SeedSummary { projects, services, testimonials })
    }

    /// Legacy: record a client ping.
    pub async fn create_status_check(&self, input: StatusCheckInput) -> Result<StatusCheck, ServiceError> {
        let op = Operation::CreateStatusCheck;
        let client_name = match input.validate() {
            Ok(name) => name,
            Err(e) => {
                record_operation(op.label(), Outcome::Invalid);
                return Err(e.into());
            }
        };
        let check = StatusCheck { id: Uuid::new_v4(), client_name, timestamp: Utc::now() };
        let result = self.repo.insert_status_check(&check).await.map(|_| check);
        self.finish(op, result)
    }

    /// Legacy: list recorded pings.
    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, ServiceError> {
        let result = self.repo.list_status_checks(self.list_limit).await;
        self.finish(Operation::ListStatusChecks, result)
    }

    /// Operation boundary: log storage failures under the operation's category
    /// and count the outcome.
    fn finish<T>(&self, op: Operation, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
        match &result {
            Ok(_) => record_operation(op.label(), Outcome::Ok),
            Err(ServiceError::Validation(e)) => {
                warn!(category = op.label(), fields = %e, "invalid input");
                record_operation(op.label(), Outcome::Invalid);
            }
            Err(ServiceError::Storage(msg)) => {
                error!(category = op.label(), err = %msg, "storage operation failed");
                record_operation(op.label(), Outcome::Error);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repository::memory::MemoryCatalogRepository;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn valid_input() -> ContactInput {
        ContactInput {
            name: Some("Juan Pérez".into()),
            company: Some("Empresa Test SA".into()),
            email: Some("juan.perez@empresatest.com".into()),
            phone: Some("+54 11 1234-5678".into()),
            industry: Some("Retail".into()),
            message: Some("Necesitamos exhibidores.".into()),
        }
    }

    fn setup() -> (Arc<MemoryCatalogRepository>, CatalogService) {
        let repo = Arc::new(MemoryCatalogRepository::new());
        let svc = CatalogService::new(repo.clone());
        (repo, svc)
    }

    /// Fails every call and counts how many reached it.
    #[derive(Default)]
    struct FailingRepository {
        calls: AtomicUsize,
    }

    impl FailingRepository {
        fn fail<T>(&self) -> Result<T, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ServiceError::Storage("connection refused: 10.0.0.5:5432".into()))
        }
    }

    #[async_trait]
    impl CatalogRepository for FailingRepository {
        async fn insert_contact(&self, _: &Contact) -> Result<Uuid, ServiceError> { self.fail() }
        async fn list_contacts(&self, _: u64) -> Result<Vec<Contact>, ServiceError> { self.fail() }
        async fn list_projects(&self, _: Option<&str>, _: u64) -> Result<Vec<Project>, ServiceError> { self.fail() }
        async fn list_services(&self, _: u64) -> Result<Vec<Service>, ServiceError> { self.fail() }
        async fn list_active_testimonials(&self, _: u64) -> Result<Vec<Testimonial>, ServiceError> { self.fail() }
        async fn find_company(&self) -> Result<Option<CompanyInfo>, ServiceError> { self.fail() }
        async fn replace_projects(&self, _: Vec<Project>) -> Result<u64, ServiceError> { self.fail() }
        async fn replace_services(&self, _: Vec<Service>) -> Result<u64, ServiceError> { self.fail() }
        async fn replace_testimonials(&self, _: Vec<Testimonial>) -> Result<u64, ServiceError> { self.fail() }
        async fn insert_status_check(&self, _: &StatusCheck) -> Result<Uuid, ServiceError> { self.fail() }
        async fn list_status_checks(&self, _: u64) -> Result<Vec<StatusCheck>, ServiceError> { self.fail() }
    }

    /// Accepts the write but reports a different key.
    struct UnacknowledgedRepository(MemoryCatalogRepository);

    #[async_trait]
    impl CatalogRepository for UnacknowledgedRepository {
        async fn insert_contact(&self, c: &Contact) -> Result<Uuid, ServiceError> {
            self.0.insert_contact(c).await?;
            Ok(Uuid::nil())
        }
        async fn list_contacts(&self, l: u64) -> Result<Vec<Contact>, ServiceError> { self.0.list_contacts(l).await }
        async fn list_projects(&self, c: Option<&str>, l: u64) -> Result<Vec<Project>, ServiceError> { self.0.list_projects(c, l).await }
        async fn list_services(&self, l: u64) -> Result<Vec<Service>, ServiceError> { self.0.list_services(l).await }
        async fn list_active_testimonials(&self, l: u64) -> Result<Vec<Testimonial>, ServiceError> { self.0.list_active_testimonials(l).await }
        async fn find_company(&self) -> Result<Option<CompanyInfo>, ServiceError> { self.0.find_company().await }
        async fn replace_projects(&self, r: Vec<Project>) -> Result<u64, ServiceError> { self.0.replace_projects(r).await }
        async fn replace_services(&self, r: Vec<Service>) -> Result<u64, ServiceError> { self.0.replace_services(r).await }
        async fn replace_testimonials(&self, r: Vec<Testimonial>) -> Result<u64, ServiceError> { self.0.replace_testimonials(r).await }
        async fn insert_status_check(&self, c: &StatusCheck) -> Result<Uuid, ServiceError> { self.0.insert_status_check(c).await }
        async fn list_status_checks(&self, l: u64) -> Result<Vec<StatusCheck>, ServiceError> { self.0.list_status_checks(l).await }
    }

    #[tokio::test]
    async fn submitted_contact_is_listed_once_with_server_fields() {
        let (_, svc) = setup();
        let before = Utc::now();
        let input = valid_input();
        let receipt = svc.submit_contact(input.clone()).await.expect("submit ok");

        let contacts = svc.list_contacts().await.unwrap();
        assert_eq!(contacts.len(), 1);
        let c = &contacts[0];
        assert_eq!(c.id, receipt.contact_id);
        assert_eq!(Some(c.name.clone()), input.name);
        assert_eq!(Some(c.company.clone()), input.company);
        assert_eq!(Some(c.email.clone()), input.email);
        assert_eq!(c.phone, input.phone);
        assert_eq!(Some(c.industry.clone()), input.industry);
        assert_eq!(Some(c.message.clone()), input.message);
        assert_eq!(c.status, "new");
        assert!(c.created_at >= before);
    }

    #[tokio::test]
    async fn contacts_list_newest_first() {
        let (_, svc) = setup();
        let first = svc.submit_contact(valid_input()).await.unwrap();
        let second = svc.submit_contact(valid_input()).await.unwrap();
        let ids: Vec<Uuid> = svc.list_contacts().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.contact_id, first.contact_id]);
    }

    #[tokio::test]
    async fn invalid_contact_never_reaches_the_store() {
        let repo = Arc::new(FailingRepository::default());
        let svc = CatalogService::new(repo.clone());

        let bad_email = ContactInput { email: Some("invalid-email".into()), ..valid_input() };
        assert!(matches!(svc.submit_contact(bad_email).await, Err(ServiceError::Validation(_))));

        let missing = ContactInput { message: None, ..valid_input() };
        match svc.submit_contact(missing).await {
            Err(ServiceError::Validation(e)) => assert!(e.has_field("message")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_contact_writes_no_record() {
        let (repo, svc) = setup();
        let bad = ContactInput { email: Some("invalid-email".into()), ..valid_input() };
        assert!(svc.submit_contact(bad).await.is_err());
        assert_eq!(repo.counts().await.0, 0);
    }

    #[tokio::test]
    async fn unacknowledged_write_is_a_storage_error() {
        let svc = CatalogService::new(Arc::new(UnacknowledgedRepository(MemoryCatalogRepository::new())));
        assert!(matches!(svc.submit_contact(valid_input()).await, Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn storage_failures_surface_as_storage_errors() {
        let svc = CatalogService::new(Arc::new(FailingRepository::default()));
        assert!(matches!(svc.submit_contact(valid_input()).await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.list_contacts().await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.list_projects(None).await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.list_services().await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.list_testimonials().await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.get_company_info().await, Err(ServiceError::Storage(_))));
        assert!(matches!(svc.seed().await, Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn project_filter_semantics_after_seed() {
        let (_, svc) = setup();
        svc.seed().await.unwrap();

        assert_eq!(svc.list_projects(None).await.unwrap().len(), 6);
        assert_eq!(svc.list_projects(Some("Todos")).await.unwrap().len(), 6);

        let cosmetics = svc.list_projects(Some("Cosmética")).await.unwrap();
        assert_eq!(cosmetics.len(), 2);
        assert!(cosmetics.iter().all(|p| p.category == "Cosmética"));

        assert!(svc.list_projects(Some("cosmética")).await.unwrap().is_empty());
        assert!(svc.list_projects(Some("NoSuchCategory")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn projects_are_newest_first() {
        let (repo, svc) = setup();
        let base = Utc::now();
        for (i, title) in ["old", "newest", "middle"].iter().enumerate() {
            let offset = match i { 0 => 0, 1 => 20, _ => 10 };
            repo.push_project(Project {
                id: Uuid::new_v4(),
                title: title.to_string(),
                category: "Retail".into(),
                image: "https://img".into(),
                description: "d".into(),
                created_at: base + Duration::seconds(offset),
                featured: false,
            })
            .await;
        }
        let titles: Vec<String> = svc.list_projects(None).await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["newest", "middle", "old"]);
    }

    #[tokio::test]
    async fn services_come_back_in_non_decreasing_order() {
        let (repo, svc) = setup();
        for order in [5, 0, 3, 3, -1] {
            repo.push_service(Service {
                id: Uuid::new_v4(),
                title: format!("s{order}"),
                description: "d".into(),
                icon: "Palette".into(),
                order,
            })
            .await;
        }
        let orders: Vec<i32> = svc.list_services().await.unwrap().iter().map(|s| s.order).collect();
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(orders.len(), 5);
    }

    #[tokio::test]
    async fn inactive_testimonials_are_never_listed() {
        let (repo, svc) = setup();
        svc.seed().await.unwrap();
        repo.push_testimonial(Testimonial {
            id: Uuid::new_v4(),
            quote: "hidden".into(),
            author: "x".into(),
            position: "y".into(),
            company: "z".into(),
            created_at: Utc::now() + Duration::seconds(60),
            active: false,
        })
        .await;

        let listed = svc.list_testimonials().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|t| t.active));
        assert_eq!(repo.counts().await.3, 4);
    }

    #[tokio::test]
    async fn company_falls_back_without_persisting() {
        let (repo, svc) = setup();
        assert_eq!(svc.get_company_info().await.unwrap(), CompanyInfo::fallback());
        assert!(repo.find_company().await.unwrap().is_none());

        let mut stored = CompanyInfo::fallback();
        stored.name = "Exhibilo SRL".into();
        repo.put_company(stored.clone()).await;
        assert_eq!(svc.get_company_info().await.unwrap(), stored);
    }

    #[tokio::test]
    async fn reseed_is_idempotent_in_content_but_mints_new_ids() {
        let (repo, svc) = setup();
        let first = svc.seed().await.unwrap();
        assert_eq!(first, SeedSummary { projects: 6, services: 3, testimonials: 3 });
        let ids_before: Vec<Uuid> = svc.list_projects(None).await.unwrap().iter().map(|p| p.id).collect();

        svc.seed().await.unwrap();
        let (_, projects, services, testimonials) = repo.counts().await;
        assert_eq!((projects, services, testimonials), (6, 3, 3));

        let after = svc.list_projects(None).await.unwrap();
        assert!(after.iter().all(|p| !ids_before.contains(&p.id)));
    }

    #[tokio::test]
    async fn list_limit_caps_results() {
        let (_, svc) = setup();
        let svc = svc.with_list_limit(2);
        for _ in 0..3 {
            svc.submit_contact(valid_input()).await.unwrap();
        }
        assert_eq!(svc.list_contacts().await.unwrap().len(), 2);
        assert_eq!(svc.clone().with_list_limit(0).list_limit(), 1);
    }

    #[tokio::test]
    async fn status_checks_round_trip() {
        let (_, svc) = setup();
        let created = svc
            .create_status_check(StatusCheckInput { client_name: Some("landing".into()) })
            .await
            .unwrap();
        assert_eq!(created.client_name, "landing");
        assert_eq!(svc.list_status_checks().await.unwrap(), vec![created]);
        assert!(matches!(
            svc.create_status_check(StatusCheckInput::default()).await,
            Err(ServiceError::Validation(_))
        ));
    }
}
