// src/models/user/fixture.rs
use chrono::{DateTime, Duration, Utc};

use super::types::{Role, Status, User};

/// Generate the mock user list served by the console API.
///
/// User `i` (1-based) gets role admin/editor/viewer in rotation and a last
/// login `i - 1` days before `now`. Everyone starts out active.
pub fn mock_users(count: usize, now: DateTime<Utc>) -> Vec<User> {
    (0..count)
        .map(|i| {
            let n = i + 1;
            User {
                id: format!("u{n}"),
                name: format!("User {n}"),
                email: format!("user{n}@example.com"),
                role: Role::ALL[i % Role::ALL.len()],
                status: Status::Active,
                last_login_at: Some(now - Duration::days(i as i64)),
            }
        })
        .collect()
}
