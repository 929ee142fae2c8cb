use crate::domain::person::Person;
use crate::pagination::PaginationState;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod in_memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, Default)]
pub struct PersonListQuery {
    pub pagination: Option<PaginationState>,
}

impl PersonListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, state: PaginationState) -> Self {
        self.pagination = Some(state);
        self
    }
}

/// Read access to the people dataset. Listing returns the full dataset size
/// together with the requested page of records, so callers can render
/// pagination controls without a second query.
pub trait PersonReader {
    fn list_people(&self, query: PersonListQuery) -> RepositoryResult<(usize, Vec<Person>)>;
}
