use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use common::types::Message;
use service::catalog::domain::{CompanyInfo, Project, Service, Testimonial};
use service::catalog::operation::Operation;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ServiceList {
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize)]
pub struct TestimonialList {
    pub testimonials: Vec<Testimonial>,
}

#[utoipa::path(get, path = "/api/projects", tag = "catalog",
    params(("category" = Option<String>, Query, description = "Exact category; \"Todos\" or absent means all")),
    responses((status = 200, description = "Projects, newest first", body = crate::openapi::ProjectListDoc)))]
pub async fn list_projects(
    State(state): State<ServerState>,
    query: Result<Query<ProjectQuery>, QueryRejection>,
) -> Result<Json<ProjectList>, JsonApiError> {
    let Query(q) = query?;
    let projects = state
        .catalog
        .list_projects(q.category.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(Operation::ListProjects, e))?;
    Ok(Json(ProjectList { projects }))
}

#[utoipa::path(get, path = "/api/services", tag = "catalog",
    responses((status = 200, description = "Services by display order", body = crate::openapi::ServiceListDoc)))]
pub async fn list_services(State(state): State<ServerState>) -> Result<Json<ServiceList>, JsonApiError> {
    let services = state
        .catalog
        .list_services()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::ListServices, e))?;
    Ok(Json(ServiceList { services }))
}

#[utoipa::path(get, path = "/api/testimonials", tag = "catalog",
    responses((status = 200, description = "Active testimonials, newest first", body = crate::openapi::TestimonialListDoc)))]
pub async fn list_testimonials(State(state): State<ServerState>) -> Result<Json<TestimonialList>, JsonApiError> {
    let testimonials = state
        .catalog
        .list_testimonials()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::ListTestimonials, e))?;
    Ok(Json(TestimonialList { testimonials }))
}

#[utoipa::path(get, path = "/api/company", tag = "catalog",
    responses((status = 200, description = "Stored company record or the built-in default", body = crate::openapi::CompanyInfoDoc)))]
pub async fn get_company_info(State(state): State<ServerState>) -> Result<Json<CompanyInfo>, JsonApiError> {
    let info = state
        .catalog
        .get_company_info()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::GetCompanyInfo, e))?;
    Ok(Json(info))
}

#[utoipa::path(post, path = "/api/seed-data", tag = "admin",
    responses(
        (status = 200, description = "Catalog replaced with the fixed seed set", body = crate::openapi::MessageDoc),
        (status = 401, description = "Admin key missing"),
        (status = 403, description = "Admin key wrong"),
    ))]
pub async fn seed_data(State(state): State<ServerState>) -> Result<Json<Message>, JsonApiError> {
    state
        .catalog
        .seed()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::Seed, e))?;
    Ok(Json(Message::new("Database seeded successfully")))
}
