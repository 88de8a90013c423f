//! Catalog module: domain records, repository seam, seed sets and the
//! `CatalogService` that applies the business rules.

pub mod domain;
pub mod operation;
pub mod repository;
pub mod repo;
pub mod seed;
pub mod service;

pub use service::{CatalogService, SeedSummary};
