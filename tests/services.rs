use people_table::pagination::PaginationState;
use people_table::repository::in_memory::InMemoryRepository;
use people_table::services::main::load_index_page;

fn state(page_index: usize, page_size: usize) -> PaginationState {
    PaginationState {
        page_index,
        page_size,
    }
}

#[test]
fn test_load_index_page_slices_and_totals() {
    let repo = InMemoryRepository::demo();

    let page = load_index_page(&repo, state(0, 2)).unwrap().people;
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page_count, 2);
    assert!(!page.has_previous);
    assert!(page.has_next);

    let page = load_index_page(&repo, state(1, 2)).unwrap().people;
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].last_name, "Three");
    assert!(page.has_previous);
    assert!(!page.has_next);
}

#[test]
fn test_load_index_page_past_the_end_keeps_total() {
    let repo = InMemoryRepository::demo();

    let page = load_index_page(&repo, state(9, 2)).unwrap().people;
    assert_eq!(page.total, 3);
    assert!(page.items.is_empty());
    assert!(!page.has_next);
}

#[cfg(feature = "test-mocks")]
mod mock_tests {
    use super::state;
    use people_table::repository::errors::RepositoryError;
    use people_table::repository::mock::MockRepository;
    use people_table::services::main::load_index_page;

    #[test]
    fn test_load_index_page_propagates_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_people()
            .returning(|_| Err(RepositoryError::Unexpected("backing store down".into())));

        assert!(load_index_page(&repo, state(0, 2)).is_err());
    }

    #[test]
    fn test_load_index_page_passes_state_through() {
        let mut repo = MockRepository::new();
        repo.expect_list_people()
            .withf(|query| query.pagination == Some(state(3, 10)))
            .returning(|_| Ok((0, vec![])));

        let page = load_index_page(&repo, state(3, 10)).unwrap().people;
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }
}
