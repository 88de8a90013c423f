//! Process-wide Prometheus registry.
//!
//! Catalog operations report one sample per call into
//! `catalog_operations_total{operation, outcome}`.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub static CATALOG_OPERATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new("catalog_operations_total", "Catalog operations by outcome"),
        &["operation", "outcome"],
    )
    .expect("valid catalog_operations_total metric");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("register catalog_operations_total");
    counter
});

/// Outcome label of a finished operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Invalid,
    Error,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Invalid => "invalid",
            Outcome::Error => "error",
        }
    }
}

pub fn record_operation(operation: &str, outcome: Outcome) {
    CATALOG_OPERATIONS
        .with_label_values(&[operation, outcome.as_str()])
        .inc();
}

/// Render every registered metric in the text exposition format.
pub fn gather_text() -> Result<String, prometheus::Error> {
    Lazy::force(&CATALOG_OPERATIONS);
    let families = REGISTRY.gather();
    let mut buf = Vec::new();
    TextEncoder::new().encode(&families, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
