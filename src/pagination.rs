//! Querystring-driven pagination state.
//!
//! The URL query string is the single source of truth for which slice of the
//! dataset is displayed. [`decode`] and [`encode`] translate between the raw
//! parameter map and a typed [`PaginationState`]; [`Paginated`] carries a page
//! of items plus the control predicates templates need.

use std::collections::BTreeMap;

use serde::Serialize;

pub const PAGE_INDEX_PARAM: &str = "pageIndex";
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Page sizes offered by the "records per page" selector.
pub const PAGE_SIZE_CHOICES: [usize; 3] = [1, 2, 10];

/// Flat string-keyed query parameter mapping. Sorted so that encoded query
/// strings come out deterministic.
pub type QueryParams = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    /// First page at the minimum page size, mirroring the decode fallbacks.
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 1,
        }
    }
}

impl PaginationState {
    pub fn previous(self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            page_index: self.page_index + 1,
            ..self
        }
    }

    /// Changes the page size while keeping the current page index.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self { page_size, ..self }
    }
}

/// Reads `pageIndex` and `pageSize` out of a query parameter map.
///
/// Missing or unparsable values fall back to `0` and `1` respectively; any
/// other keys in the map are ignored. Never fails.
pub fn decode(params: &QueryParams) -> PaginationState {
    let default = PaginationState::default();
    PaginationState {
        page_index: parse_param(params, PAGE_INDEX_PARAM).unwrap_or(default.page_index),
        page_size: parse_param(params, PAGE_SIZE_PARAM).unwrap_or(default.page_size),
    }
}

fn parse_param(params: &QueryParams, key: &str) -> Option<usize> {
    params.get(key).and_then(|value| value.parse().ok())
}

/// Returns a copy of `params` with the pagination keys overwritten from
/// `state`. Every other key is preserved unchanged.
pub fn encode(params: &QueryParams, state: PaginationState) -> QueryParams {
    let mut params = params.clone();
    params.insert(PAGE_INDEX_PARAM.to_string(), state.page_index.to_string());
    params.insert(PAGE_SIZE_PARAM.to_string(), state.page_size.to_string());
    params
}

/// URL-encodes a parameter map in key order.
pub fn to_query_string(params: &QueryParams) -> String {
    serde_html_form::to_string(params).unwrap_or_default()
}

/// One page of items together with the pagination facts templates render
/// controls from. `total` always refers to the full dataset, never the slice:
/// the caller slices, not this type.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: usize, state: PaginationState) -> Self {
        // A zero page size comes straight from a hand-edited URL; treat it as
        // zero pages so both controls disable instead of dividing by zero.
        let page_count = if state.page_size == 0 {
            0
        } else {
            total.div_ceil(state.page_size)
        };

        Self {
            items,
            total,
            page_index: state.page_index,
            page_size: state.page_size,
            page_count,
            has_previous: state.page_index > 0,
            has_next: state.page_index + 1 < page_count,
        }
    }
}
