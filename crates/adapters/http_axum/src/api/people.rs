//! JSON handlers for the person endpoints.

use std::str::FromStr;

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use census_app::ports::PersonRepository;
use census_domain::error::{CensusError, ValidationError};
use census_domain::id::PersonId;
use census_domain::person::Person;

use crate::error::ApiError;
use crate::state::AppState;
use crate::streaming;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    /// The matching record as a JSON object.
    Found(Json<Person>),
    /// No record with the requested id — a successful empty body, not an error.
    Empty,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Found(json) => json.into_response(),
            Self::Empty => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// The records, streamed as a JSON array.
    People(Body),
    /// The accept predicate did not match; the route falls through to 404.
    RouteMismatch,
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::People(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Self::RouteMismatch => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// `GET /person/{id}`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
{
    let person_id = PersonId::from_str(&id)
        .map_err(|_| CensusError::from(ValidationError::InvalidId(id.clone())))?;

    match state.person_service.get_person(person_id).await? {
        Some(person) => Ok(GetResponse::Found(Json(person))),
        None => Ok(GetResponse::Empty),
    }
}

/// `GET /person`
///
/// Matches only when the request declares acceptance of JSON; otherwise the
/// route falls through to not-found.
pub async fn list<PR>(State(state): State<AppState<PR>>, headers: HeaderMap) -> ListResponse
where
    PR: PersonRepository + Send + Sync + 'static,
{
    if !accepts_json(&headers) {
        return ListResponse::RouteMismatch;
    }

    ListResponse::People(streaming::json_array(state.person_service.list_people()))
}

/// Whether the `Accept` header is present and one of its media ranges is
/// compatible with `application/json`.
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| {
            accept.split(',').any(|range| {
                let media = range.split(';').next().unwrap_or("").trim();
                media.eq_ignore_ascii_case("application/json")
                    || media.eq_ignore_ascii_case("application/*")
                    || media.eq_ignore_ascii_case("*/*")
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn should_accept_exact_json_media_type() {
        assert!(accepts_json(&headers_with_accept("application/json")));
    }

    #[test]
    fn should_accept_json_with_quality_parameter() {
        assert!(accepts_json(&headers_with_accept(
            "text/html, application/json;q=0.9"
        )));
    }

    #[test]
    fn should_accept_wildcard_ranges() {
        assert!(accepts_json(&headers_with_accept("*/*")));
        assert!(accepts_json(&headers_with_accept("application/*")));
    }

    #[test]
    fn should_reject_missing_accept_header() {
        assert!(!accepts_json(&HeaderMap::new()));
    }

    #[test]
    fn should_reject_incompatible_accept_header() {
        assert!(!accepts_json(&headers_with_accept("text/html")));
    }
}
