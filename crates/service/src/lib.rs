//! Service layer owning the catalog business rules on top of `models`.
//! - Validates contact submissions before anything touches the store.
//! - Applies filtering, ordering and defaulting for the catalog reads.
//! - Reseeds the demo collections from fixed seed sets.

pub mod errors;
pub mod catalog;
