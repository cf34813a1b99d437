//! Person service — use-cases over the person directory.

use rand::Rng;

use census_domain::error::CensusError;
use census_domain::id::PersonId;
use census_domain::person::{NewPerson, Person};

use crate::ports::{PersonRepository, PersonStream};

/// Seeded ages are drawn uniformly from `0..MAX_SEED_AGE`.
const MAX_SEED_AGE: u32 = 100;

/// Application service for reading and seeding the person directory.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a person by id.
    ///
    /// A missing record is `Ok(None)`; only storage failures are errors.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Option<Person>, CensusError> {
        self.repo.find_by_id(id).await
    }

    /// Stream all persons, order unspecified.
    pub fn list_people(&self) -> PersonStream {
        self.repo.all()
    }

    /// Insert one record per family name, each with a random age in
    /// `0..100`. Intended to run exactly once, at startup.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Validation`] for an empty family name, or a
    /// storage error propagated from the repository.
    pub async fn seed_people(&self, family_names: &[&str]) -> Result<Vec<Person>, CensusError> {
        let drafts = {
            let mut rng = rand::rng();
            family_names
                .iter()
                .map(|name| {
                    NewPerson::builder()
                        .family_name(*name)
                        .age(rng.random_range(0..MAX_SEED_AGE))
                        .build()
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut seeded = Vec::with_capacity(drafts.len());
        for draft in drafts {
            seeded.push(self.repo.create(draft).await?);
        }
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_domain::error::ValidationError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio_stream::StreamExt;

    struct InMemoryPeople {
        next_id: AtomicI64,
        store: Mutex<BTreeMap<i64, Person>>,
    }

    impl Default for InMemoryPeople {
        fn default() -> Self {
            Self {
                next_id: AtomicI64::new(1),
                store: Mutex::new(BTreeMap::new()),
            }
        }
    }

    impl PersonRepository for InMemoryPeople {
        fn create(
            &self,
            draft: NewPerson,
        ) -> impl Future<Output = Result<Person, CensusError>> + Send {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let person = draft.into_person(PersonId::from_i64(id));
            let mut store = self.store.lock().unwrap();
            store.insert(id, person.clone());
            async { Ok(person) }
        }

        fn find_by_id(
            &self,
            id: PersonId,
        ) -> impl Future<Output = Result<Option<Person>, CensusError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id.as_i64()).cloned();
            async { Ok(result) }
        }

        fn all(&self) -> PersonStream {
            let store = self.store.lock().unwrap();
            let people: Vec<Result<Person, CensusError>> =
                store.values().cloned().map(Ok).collect();
            Box::pin(tokio_stream::iter(people))
        }
    }

    fn make_service() -> PersonService<InMemoryPeople> {
        PersonService::new(InMemoryPeople::default())
    }

    async fn collect(mut stream: PersonStream) -> Vec<Person> {
        let mut people = Vec::new();
        while let Some(item) = stream.next().await {
            people.push(item.unwrap());
        }
        people
    }

    #[tokio::test]
    async fn should_seed_one_record_per_family_name() {
        let svc = make_service();
        let seeded = svc.seed_people(&["Maldini", "Poutsma"]).await.unwrap();

        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].family_name, "Maldini");
        assert_eq!(seeded[1].family_name, "Poutsma");
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_when_seeding() {
        let svc = make_service();
        let seeded = svc.seed_people(&["Maldini", "Poutsma"]).await.unwrap();
        assert_ne!(seeded[0].id, seeded[1].id);
    }

    #[tokio::test]
    async fn should_draw_seeded_ages_within_range() {
        let svc = make_service();
        let seeded = svc.seed_people(&["Maldini", "Poutsma"]).await.unwrap();
        for person in seeded {
            assert!(person.age < 100, "age {} out of range", person.age);
        }
    }

    #[tokio::test]
    async fn should_reject_seeding_with_empty_family_name() {
        let svc = make_service();
        let result = svc.seed_people(&["Maldini", ""]).await;
        assert!(matches!(
            result,
            Err(CensusError::Validation(ValidationError::EmptyFamilyName))
        ));
    }

    #[tokio::test]
    async fn should_get_person_by_id_after_seeding() {
        let svc = make_service();
        let seeded = svc.seed_people(&["Maldini"]).await.unwrap();
        let id = seeded[0].id;

        let fetched = svc.get_person(id).await.unwrap().unwrap();
        assert_eq!(fetched, seeded[0]);
    }

    #[tokio::test]
    async fn should_return_none_when_person_missing() {
        let svc = make_service();
        let result = svc.get_person(PersonId::from_i64(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_seeded_people() {
        let svc = make_service();
        let mut seeded = svc.seed_people(&["Maldini", "Poutsma"]).await.unwrap();
        let mut listed = collect(svc.list_people()).await;

        seeded.sort_by_key(|p| p.id);
        listed.sort_by_key(|p| p.id);
        assert_eq!(listed, seeded);
    }

    #[tokio::test]
    async fn should_list_nothing_when_store_empty() {
        let svc = make_service();
        let listed = collect(svc.list_people()).await;
        assert!(listed.is_empty());
    }
}
