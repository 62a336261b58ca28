// src/models/table_filter/columns.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{SortDir, SortKey, SortSpec};

/// Ordered column definition of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    /// `None` for columns that cannot be sorted.
    pub sort_key: Option<SortKey>,
}

/// Header cell as the presentation layer draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<&'static str>,
}

pub fn sort_indicator(dir: SortDir) -> &'static str {
    match dir {
        SortDir::Asc => "▲",
        SortDir::Desc => "▼",
    }
}

/// Resolve each column against the current sort. Only the active column
/// carries an indicator.
pub fn header_cells(columns: &[ColumnDef], sort: SortSpec) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|c| {
            let active = c.sort_key == Some(sort.key);
            HeaderCell {
                key: c.key,
                label: c.label,
                sortable: c.sort_key.is_some(),
                active,
                indicator: active.then(|| sort_indicator(sort.dir)),
            }
        })
        .collect()
}

/// "1 result", "0 results", "7 results".
pub fn result_label(total: usize) -> String {
    if total == 1 {
        format!("{total} result")
    } else {
        format!("{total} results")
    }
}

pub fn page_label(page: usize, max_page: usize) -> String {
    format!("Page {page} / {max_page}")
}

/// Last-login cell text; users who never logged in show a dash.
pub fn last_login_label(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "—".to_string(),
    }
}
