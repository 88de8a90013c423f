use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const ADMIN_KEY_HEADER: &str = "X-API-Key";

/// Shared-secret gate for administrative routes. Disabled when no key is set.
#[derive(Clone, Default)]
pub struct AdminGate {
    api_key: Option<Arc<str>>,
}

impl AdminGate {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key: api_key.filter(|k| !k.trim().is_empty()).map(Arc::from) }
    }

    pub fn is_enabled(&self) -> bool { self.api_key.is_some() }

    fn check(&self, presented: Option<&str>) -> Result<(), JsonApiError> {
        let Some(expected) = self.api_key.as_deref() else { return Ok(()) };
        match presented {
            None => Err(JsonApiError::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some(format!("missing {ADMIN_KEY_HEADER} header")),
            )),
            Some(k) if k == expected => Ok(()),
            Some(_) => Err(JsonApiError::new(StatusCode::FORBIDDEN, "Forbidden", Some("invalid admin key".into()))),
        }
    }
}

/// Middleware: require the admin key on administrative routes
pub async fn require_admin_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if let Err(e) = state.admin.check(presented.as_deref()) {
        warn!(path = %req.uri().path(), status = %e.status, "admin route denied");
        return Err(e);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_gate_lets_everything_through() {
        let gate = AdminGate::new(None);
        assert!(!gate.is_enabled());
        assert!(gate.check(None).is_ok());
        assert!(AdminGate::new(Some("  ".into())).check(None).is_ok());
    }

    #[test]
    fn enabled_gate_distinguishes_missing_and_wrong_keys() {
        let gate = AdminGate::new(Some("k-123".into()));
        assert!(gate.is_enabled());
        assert!(gate.check(Some("k-123")).is_ok());
        assert_eq!(gate.check(None).unwrap_err().status, StatusCode::UNAUTHORIZED);
        assert_eq!(gate.check(Some("nope")).unwrap_err().status, StatusCode::FORBIDDEN);
    }
}
