use serde::Serialize;

use crate::models::table_filter::columns::{self, HeaderCell};
use crate::models::table_filter::{SortSpec, TableView, PAGE_SIZE};
use crate::models::user::{filter, User};

/// Table row: the user record plus its rendered last-login cell.
#[derive(Serialize, Debug, Clone)]
pub struct UserRow {
    #[serde(flatten)]
    pub user: User,
    pub last_login: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        UserRow {
            last_login: columns::last_login_label(user.last_login_at),
            user,
        }
    }
}

/// One computed table page for API clients.
#[derive(Serialize, Debug, Clone)]
pub struct TablePageResponse {
    pub items: Vec<UserRow>,
    pub total: usize,
    pub page: usize,
    pub max_page: usize,
    pub page_size: usize,
    pub no_results: bool,
    pub result_label: String,
    pub page_label: String,
    pub sort_key: &'static str,
    pub sort_dir: &'static str,
    pub columns: Vec<HeaderCell>,
}

impl TablePageResponse {
    pub fn new(view: TableView, sort: SortSpec) -> Self {
        TablePageResponse {
            no_results: view.no_results(),
            result_label: columns::result_label(view.total),
            page_label: columns::page_label(view.page, view.max_page),
            sort_key: sort.key.as_str(),
            sort_dir: sort.dir.as_str(),
            columns: columns::header_cells(&filter::default_columns(), sort),
            total: view.total,
            page: view.page,
            max_page: view.max_page,
            page_size: PAGE_SIZE,
            items: view.rows.into_iter().map(UserRow::from).collect(),
        }
    }
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
