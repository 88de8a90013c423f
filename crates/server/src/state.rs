use std::sync::Arc;

use service::catalog::CatalogService;

use crate::admin::AdminGate;

/// Shared per-process handler state. Cloned per request; everything inside is `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
    pub admin: AdminGate,
}

impl ServerState {
    pub fn new(catalog: CatalogService, admin: AdminGate) -> Self {
        Self { catalog: Arc::new(catalog), admin }
    }
}
