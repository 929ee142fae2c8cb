use crate::dto::main::IndexPageData;
use crate::pagination::{Paginated, PaginationState};
use crate::repository::{PersonListQuery, PersonReader};
use crate::services::ServiceResult;

/// Loads the current page of people for the index table.
///
/// Invoked with the pagination state decoded from the request URL; the
/// returned page carries the full dataset size so controls can be rendered
/// against the real total, not the slice length.
pub fn load_index_page<R>(repo: &R, state: PaginationState) -> ServiceResult<IndexPageData>
where
    R: PersonReader + ?Sized,
{
    let (total, people) = repo.list_people(PersonListQuery::new().paginate(state))?;

    Ok(IndexPageData {
        people: Paginated::new(people, total, state),
    })
}
