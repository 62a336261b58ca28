pub mod filter;
pub mod fixture;
pub mod types;

pub use fixture::mock_users;
pub use types::{Role, Status, User, UserEnvelope};
