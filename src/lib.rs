//! Admin console back end: a mocked user-listing API and the view-model of
//! the user table (search, role/status filters, sort, pagination).

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
