//! # census-domain
//!
//! Pure domain model for the census person directory.
//!
//! ## Responsibilities
//! - Foundational types: the [`PersonId`](id::PersonId) identifier and error
//!   conventions
//! - Define the **Person** record (store-assigned id, family name, age) and
//!   the unsaved [`NewPerson`](person::NewPerson) draft used at seed time
//! - Contain all invariant enforcement (non-empty family name)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod person;
