// src/models/user/filter.rs
use std::cmp::Ordering;

use super::types::User;
use crate::models::table_filter::compare::natural_cmp;
use crate::models::table_filter::{ColumnDef, SortKey, ViewParams};

/// Normalize raw search input into the needle used for matching.
pub fn needle(search: &str) -> String {
    search.trim().to_lowercase()
}

/// Name or email contains the (already normalized) needle.
pub fn matches_search(user: &User, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
}

/// Search, role, and effective status all pass.
pub fn matches(user: &User, needle: &str, params: &ViewParams) -> bool {
    matches_search(user, needle)
        && params.role.allows(user.role)
        && params.effective_status().allows(user.status)
}

/// Ascending order of two users on one column.
pub fn compare_by(a: &User, b: &User, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => natural_cmp(&a.name, &b.name),
        SortKey::Email => natural_cmp(&a.email, &b.email),
        SortKey::Role => natural_cmp(a.role.as_str(), b.role.as_str()),
        SortKey::LastLogin => a.last_login_millis().cmp(&b.last_login_millis()),
    }
}

/// Column definitions for the users table (order = display order).
pub fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef { key: "name",        label: "Name",       sort_key: Some(SortKey::Name) },
        ColumnDef { key: "email",       label: "Email",      sort_key: Some(SortKey::Email) },
        ColumnDef { key: "role",        label: "Role",       sort_key: Some(SortKey::Role) },
        ColumnDef { key: "lastLoginAt", label: "Last login", sort_key: Some(SortKey::LastLogin) },
        ColumnDef { key: "status",      label: "Status",     sort_key: None },
    ]
}
