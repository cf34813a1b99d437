//! Typed identifier for persons.
//!
//! Unlike client-generated identifiers, a [`PersonId`] is assigned by the
//! store on insert; there is no way to mint a fresh one in the domain.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Person`](crate::person::Person).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap an existing store-assigned identifier.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
