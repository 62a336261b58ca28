pub mod table_filter;
pub mod user;
