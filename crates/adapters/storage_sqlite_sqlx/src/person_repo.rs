//! `SQLite` implementation of [`PersonRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;

use census_app::ports::{PersonRepository, PersonStream};
use census_domain::error::CensusError;
use census_domain::id::PersonId;
use census_domain::person::{NewPerson, Person};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let family_name: String = row.try_get("family_name")?;
        let age: u32 = row.try_get("age")?;

        Ok(Self(Person {
            id: PersonId::from_i64(id),
            family_name,
            age,
        }))
    }
}

const INSERT: &str = "INSERT INTO people (family_name, age) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM people WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM people";

/// Upper bound on rows buffered between the database and a slow consumer.
const STREAM_BUFFER: usize = 16;

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    fn create(
        &self,
        draft: NewPerson,
    ) -> impl Future<Output = Result<Person, CensusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&draft.family_name)
                .bind(draft.age)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = PersonId::from_i64(result.last_insert_rowid());
            Ok(draft.into_person(id))
        }
    }

    fn find_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, CensusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|wrapper| wrapper.0))
        }
    }

    /// Rows are forwarded through a bounded channel as the database yields
    /// them; production stops once the receiving stream is dropped.
    ///
    /// Must be called from within a tokio runtime.
    fn all(&self) -> PersonStream {
        let pool = self.pool.clone();
        let (tx, rx) = mpsc::channel::<Result<Person, CensusError>>(STREAM_BUFFER);

        tokio::spawn(async move {
            let mut rows = sqlx::query_as::<_, Wrapper>(SELECT_ALL).fetch(&pool);
            while let Some(row) = rows.next().await {
                let item = row
                    .map(|wrapper| wrapper.0)
                    .map_err(|err| StorageError::from(err).into());
                let failed = item.is_err();
                // a failed send means the consumer went away
                if tx.send(item).await.is_err() || failed {
                    break;
                }
            }
        });

        Box::pin(ReceiverStream::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqlitePersonRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqlitePersonRepository::new(db.pool().clone())
    }

    fn draft(family_name: &str, age: u32) -> NewPerson {
        NewPerson::builder()
            .family_name(family_name)
            .age(age)
            .build()
            .unwrap()
    }

    async fn collect(mut stream: PersonStream) -> Vec<Person> {
        let mut people = Vec::new();
        while let Some(item) = stream.next().await {
            people.push(item.unwrap());
        }
        people
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_person() {
        let repo = setup().await;

        let created = repo.create(draft("Maldini", 34)).await.unwrap();

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.family_name, "Maldini");
        assert_eq!(fetched.age, 34);
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_insert() {
        let repo = setup().await;

        let first = repo.create(draft("Maldini", 34)).await.unwrap();
        let second = repo.create(draft("Poutsma", 51)).await.unwrap();

        assert!(second.id.as_i64() > first.id.as_i64());
    }

    #[tokio::test]
    async fn should_return_none_when_person_not_found() {
        let repo = setup().await;
        let result = repo.find_by_id(PersonId::from_i64(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_stream_all_people() {
        let repo = setup().await;
        let first = repo.create(draft("Maldini", 34)).await.unwrap();
        let second = repo.create(draft("Poutsma", 51)).await.unwrap();

        let mut people = collect(repo.all()).await;
        people.sort_by_key(|p| p.id);

        assert_eq!(people, vec![first, second]);
    }

    #[tokio::test]
    async fn should_stream_nothing_when_table_empty() {
        let repo = setup().await;
        let people = collect(repo.all()).await;
        assert!(people.is_empty());
    }

    #[tokio::test]
    async fn should_store_zero_age_through_roundtrip() {
        let repo = setup().await;
        let created = repo.create(draft("Maldini", 0)).await.unwrap();
        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.age, 0);
    }
}
