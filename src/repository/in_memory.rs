//! Fixed in-memory people data source.

use std::sync::Arc;

use crate::domain::person::Person;
use crate::pagination::PaginationState;
use crate::repository::errors::RepositoryResult;
use crate::repository::{PersonListQuery, PersonReader};

/// Owns the full dataset for the lifetime of the process. Records are never
/// mutated after construction; clones share the same backing list.
#[derive(Clone)]
pub struct InMemoryRepository {
    people: Arc<Vec<Person>>,
}

impl InMemoryRepository {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: Arc::new(people),
        }
    }

    /// The three-record demo dataset the application ships with.
    pub fn demo() -> Self {
        Self::new(vec![
            Person::new("Person", "One", 1),
            Person::new("Person", "Two", 2),
            Person::new("Person", "Three", 3),
        ])
    }

    fn slice(&self, state: PaginationState) -> Vec<Person> {
        let total = self.people.len();
        let start = state.page_index.saturating_mul(state.page_size).min(total);
        let end = start.saturating_add(state.page_size).min(total);
        self.people[start..end].to_vec()
    }
}

impl PersonReader for InMemoryRepository {
    fn list_people(&self, query: PersonListQuery) -> RepositoryResult<(usize, Vec<Person>)> {
        let total = self.people.len();
        let items = match query.pagination {
            Some(state) => self.slice(state),
            None => self.people.as_ref().clone(),
        };
        Ok((total, items))
    }
}
