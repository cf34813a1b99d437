//! Person — the single persisted record of the directory.
//!
//! A [`Person`] always carries a store-assigned id; the id-less draft handed
//! to the store at seed time is a [`NewPerson`].

use serde::{Deserialize, Serialize};

use crate::error::{CensusError, ValidationError};
use crate::id::PersonId;

/// A stored person record.
///
/// Serialises with the `familyName` JSON key expected by API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub family_name: String,
    pub age: u32,
}

/// An unsaved person draft — everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub family_name: String,
    pub age: u32,
}

impl NewPerson {
    /// Create a builder for constructing a [`NewPerson`].
    #[must_use]
    pub fn builder() -> NewPersonBuilder {
        NewPersonBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Validation`] when `family_name` is empty.
    pub fn validate(&self) -> Result<(), CensusError> {
        if self.family_name.is_empty() {
            return Err(ValidationError::EmptyFamilyName.into());
        }
        Ok(())
    }

    /// Attach a store-assigned id, turning the draft into a [`Person`].
    #[must_use]
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            family_name: self.family_name,
            age: self.age,
        }
    }
}

/// Step-by-step builder for [`NewPerson`].
#[derive(Debug, Default)]
pub struct NewPersonBuilder {
    family_name: Option<String>,
    age: Option<u32>,
}

impl NewPersonBuilder {
    #[must_use]
    pub fn family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Consume the builder, validate, and return a [`NewPerson`].
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Validation`] if `family_name` is missing or
    /// empty.
    pub fn build(self) -> Result<NewPerson, CensusError> {
        let person = NewPerson {
            family_name: self.family_name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        };
        person.validate()?;
        Ok(person)
    }
}
