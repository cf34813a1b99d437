//! JSON API handler modules.

pub mod people;

use axum::Router;
use axum::routing::get;

use census_app::ports::PersonRepository;

use crate::state::AppState;

/// Build the person routes.
///
/// The dispatch table, evaluated first match wins:
///
/// | Method | Path          | Predicate                    | Handler        |
/// |--------|---------------|------------------------------|----------------|
/// | GET    | /person/{id}  | —                            | `people::get`  |
/// | GET    | /person       | Accept matches `application/json` | `people::list` |
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/person/{id}", get(people::get::<PR>))
        .route("/person", get(people::list::<PR>))
}
