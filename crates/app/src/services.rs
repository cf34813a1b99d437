//! Application services — one use-case struct per aggregate.

pub mod person_service;
