mod api;

pub use api::{ApiErrorResponse, TablePageResponse, UserRow};
