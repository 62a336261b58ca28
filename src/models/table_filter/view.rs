// src/models/table_filter/view.rs

use super::{ViewParams, SortDir, PAGE_SIZE};
use crate::models::user::{filter, User};

/// One computed page of the user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Rows of the current page, in display order.
    pub rows: Vec<User>,
    /// Rows matching search + filters, before pagination.
    pub total: usize,
    /// Page actually shown, clamped into `1..=max_page`.
    pub page: usize,
    /// Always at least 1, even when nothing matches.
    pub max_page: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Nothing matched search + filters.
    pub fn no_results(&self) -> bool {
        self.total == 0
    }
}

pub fn max_page(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Filter, sort, and slice `users` for the given parameters.
///
/// The source slice is only read. Sorting is stable and descending order is
/// the negated ascending comparison, so equal rows keep their source order
/// in both directions.
pub fn compute(users: &[User], params: &ViewParams) -> TableView {
    let needle = filter::needle(&params.search);

    let mut rows: Vec<&User> = users
        .iter()
        .filter(|u| filter::matches(u, &needle, params))
        .collect();

    let key = params.sort.key;
    match params.sort.dir {
        SortDir::Asc => rows.sort_by(|a, b| filter::compare_by(a, b, key)),
        SortDir::Desc => rows.sort_by(|a, b| filter::compare_by(a, b, key).reverse()),
    }

    let total = rows.len();
    let max_page = max_page(total);
    let page = params.page.clamp(1, max_page);
    let start = (page - 1) * PAGE_SIZE;

    log::debug!(
        "user table: {total} of {} rows match, page {page}/{max_page}, sort {} {}",
        users.len(),
        key.as_str(),
        params.sort.dir.as_str()
    );

    TableView {
        rows: rows.into_iter().skip(start).take(PAGE_SIZE).cloned().collect(),
        total,
        page,
        max_page,
    }
}
