// src/models/table_filter/state.rs

use super::{compute, RoleFilter, SortKey, StatusFilter, TableView, ViewParams};
use crate::models::user::User;

/// Table controls as the user manipulates them.
///
/// Every change to search or filters sends the user back to page 1; sort
/// changes keep the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    params: ViewParams,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn page(&self) -> usize {
        self.params.page
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.params.search = text.into();
        self.params.page = 1;
    }

    pub fn set_role_filter(&mut self, role: RoleFilter) {
        self.params.role = role;
        self.params.page = 1;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.params.status = status;
        self.params.page = 1;
    }

    pub fn set_active_only(&mut self, active_only: bool) {
        self.params.active_only = active_only;
        self.params.page = 1;
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.params.sort = self.params.sort.toggled(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.params.page = page.max(1);
    }

    pub fn prev_page(&mut self) {
        self.params.page = self.params.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, max_page: usize) {
        self.params.page = (self.params.page + 1).min(max_page.max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.params.page > 1
    }

    pub fn has_next(&self, max_page: usize) -> bool {
        self.params.page < max_page
    }

    /// Clear search and filters. Sort order survives a reset.
    pub fn reset(&mut self) {
        self.params = ViewParams { sort: self.params.sort, ..ViewParams::default() };
    }

    pub fn view(&self, users: &[User]) -> TableView {
        compute(users, &self.params)
    }
}
