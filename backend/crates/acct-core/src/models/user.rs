//! User account entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account.
/// The id is assigned at creation and never changes; email is unique across
/// all accounts, enforced at registration time rather than by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Stored verbatim and compared with plain equality at login.
    pub password: String,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password,
        }
    }
}
