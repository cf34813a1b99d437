//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use tower_http::trace::TraceLayer;

use census_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Routes behave as a static dispatch table, first match wins; anything
/// that matches no entry — unknown paths and unknown methods alike —
/// receives a plain 404. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR>(state: AppState<PR>) -> Router
where
    PR: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
