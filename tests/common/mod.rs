//! Shared fixtures for the user table tests.
//!
//! - `user()` - one record with no last login
//! - `bob_and_amy()` - the two-record example set
//! - `mixed_users()` - a dozen records spread over every role and status

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use admin_console::models::user::{Role, Status, User};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

// ============================================================================
// RECORD BUILDERS
// ============================================================================

pub fn user(id: &str, name: &str, email: &str, role: Role, status: Status) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login_at: None,
    }
}

pub fn bob_and_amy() -> Vec<User> {
    vec![
        user("u1", "Bob", "b@x.com", Role::Admin, Status::Active),
        user("u2", "Amy", "a@x.com", Role::Viewer, Status::Suspended),
    ]
}

/// Twelve users: names collide on purpose so stability is observable, two
/// start with an accented letter, some have never logged in, every third one
/// is suspended.
pub fn mixed_users() -> Vec<User> {
    let names = [
        "item10", "Item2", "alice", "Alice", "bob", "Ölaf",
        "dave", "item2", "Émile", "frank", "Bob", "zoe",
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut u = user(
                &format!("m{i}"),
                name,
                &format!("{}{}@corp{}.example", name.to_lowercase(), i % 4, i % 2),
                Role::ALL[i % 3],
                if i % 3 == 2 { Status::Suspended } else { Status::Active },
            );
            if i % 4 != 1 {
                u.last_login_at = Some(fixed_now() - Duration::hours((i as i64 * 7) % 40));
            }
            u
        })
        .collect()
}
