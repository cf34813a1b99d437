//! Storage port — the repository trait for person persistence.

use std::future::Future;
use std::pin::Pin;

use tokio_stream::Stream;

use census_domain::error::CensusError;
use census_domain::id::PersonId;
use census_domain::person::{NewPerson, Person};

/// An owned, boxed stream of person records.
///
/// The listing operation yields records one by one as the store produces
/// them; dropping the stream stops production.
pub type PersonStream = Pin<Box<dyn Stream<Item = Result<Person, CensusError>> + Send>>;

/// Repository for persisting and querying [`Person`]s.
///
/// Only reads plus the seed-time insert are exposed; the directory has no
/// update or delete operations.
pub trait PersonRepository {
    /// Insert a draft and return the stored record with its assigned id.
    fn create(
        &self,
        draft: NewPerson,
    ) -> impl Future<Output = Result<Person, CensusError>> + Send;

    /// Look up a single record by primary key.
    ///
    /// Absence is `Ok(None)`, not an error.
    fn find_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, CensusError>> + Send;

    /// Stream every stored record, order unspecified.
    fn all(&self) -> PersonStream;
}
