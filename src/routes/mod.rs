pub mod submit;

use axum::routing::post;
use axum::Router;

use crate::middleware::origin_guard;
use crate::state::SharedState;

pub fn submit_routes(state: SharedState) -> Router<SharedState> {
    Router::new()
        // Canonical route plus the legacy alias, served by one handler
        .route("/gpu-requests", post(submit::submit))
        .route("/submit-form", post(submit::submit))
        .layer(axum::middleware::from_fn_with_state(
            state,
            origin_guard::require_allowed_domain,
        ))
}
