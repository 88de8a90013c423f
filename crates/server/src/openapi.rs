//! Schema-only mirrors of the wire types, kept here so the service crate stays
//! free of documentation derives.

use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ContactInputDoc {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct ContactCreatedDoc { pub success: bool, pub message: String, pub contact_id: Uuid }

#[derive(ToSchema)]
pub struct ContactDoc {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    pub message: String,
    /// RFC 3339
    pub created_at: String,
    pub status: String,
}

#[derive(ToSchema)]
pub struct ProjectDoc {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub created_at: String,
    pub featured: bool,
}

#[derive(ToSchema)]
pub struct ServiceDoc { pub id: Uuid, pub title: String, pub description: String, pub icon: String, pub order: i32 }

#[derive(ToSchema)]
pub struct TestimonialDoc {
    pub id: Uuid,
    pub quote: String,
    pub author: String,
    pub position: String,
    pub company: String,
    pub created_at: String,
    pub active: bool,
}

#[derive(ToSchema)]
pub struct ProjectListDoc { pub projects: Vec<ProjectDoc> }

#[derive(ToSchema)]
pub struct ServiceListDoc { pub services: Vec<ServiceDoc> }

#[derive(ToSchema)]
pub struct TestimonialListDoc { pub testimonials: Vec<TestimonialDoc> }

#[derive(ToSchema)]
pub struct CompanyInfoDoc {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub social: BTreeMap<String, String>,
}

#[derive(ToSchema)]
pub struct StatusCheckInputDoc { pub client_name: String }

#[derive(ToSchema)]
pub struct StatusCheckDoc { pub id: Uuid, pub client_name: String, pub timestamp: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::contact::submit_contact,
        crate::routes::contact::list_contacts,
        crate::routes::catalog::list_projects,
        crate::routes::catalog::list_services,
        crate::routes::catalog::list_testimonials,
        crate::routes::catalog::get_company_info,
        crate::routes::catalog::seed_data,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ContactInputDoc,
            ContactCreatedDoc,
            ContactDoc,
            ProjectDoc,
            ServiceDoc,
            TestimonialDoc,
            ProjectListDoc,
            ServiceListDoc,
            TestimonialListDoc,
            CompanyInfoDoc,
            StatusCheckInputDoc,
            StatusCheckDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contacts"),
        (name = "catalog"),
        (name = "admin"),
        (name = "status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_public_path() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/api/", "/api/contact", "/api/projects", "/api/seed-data", "/api/status"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
