use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::origin;

/// Middleware that rejects submissions whose Origin (or Referer) hostname is
/// not on the configured allow-list. Runs before the body is touched.
pub async fn require_allowed_domain(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match origin::submitting_hostname(req.headers()) {
        Some(domain) if origin::is_allowed(&domain, &state.config.allowed_domains) => {
            Ok(next.run(req).await)
        }
        Some(domain) => {
            tracing::warn!("Rejected submission from unauthorized domain: {domain}");
            Err(AppError::Forbidden(
                "Domain not authorized for form submissions".to_string(),
            ))
        }
        None => Err(AppError::Forbidden(
            "Domain not authorized for form submissions".to_string(),
        )),
    }
}
