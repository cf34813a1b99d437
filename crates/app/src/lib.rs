//! # census-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement:
//!   - `PersonRepository` — seed-time insert, lookup by id, stream of all
//! - Define the **driving port** as a use-case struct:
//!   - `PersonService` — get one, list all, seed the store
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `census-domain` only (plus `tokio-stream` for the stream
//! trait used by the listing port). Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
