//! SeaORM entities, one per record collection, plus the shared field
//! validators used by the service layer.

pub mod errors;
pub mod db;
pub mod validation;
pub mod contact;
pub mod project;
pub mod service;
pub mod testimonial;
pub mod company;
pub mod status_check;

#[cfg(test)]
mod tests;
