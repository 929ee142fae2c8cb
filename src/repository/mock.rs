//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::person::Person;
use crate::repository::errors::RepositoryResult;
use crate::repository::{PersonListQuery, PersonReader};

mock! {
    pub Repository {}

    impl PersonReader for Repository {
        fn list_people(&self, query: PersonListQuery) -> RepositoryResult<(usize, Vec<Person>)>;
    }
}
