//! # census-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the two person read endpoints (`GET /person/{id}`, `GET /person`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses; the listing is streamed
//!   as an incrementally-encoded JSON array rather than buffered wholesale
//!
//! ## Dependency rule
//! Depends on `census-app` (for the port trait and service) and
//! `census-domain` (for domain types used in response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

mod streaming;
