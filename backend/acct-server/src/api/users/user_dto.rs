use acct_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
///
/// Mirrors the stored record one-to-one, password included; responses
/// return accounts wholesale.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            password: u.password,
        }
    }
}
