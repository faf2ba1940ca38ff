//! Storage seam for user records.

use crate::Result;

use acct_core::User;

use async_trait::async_trait;
use uuid::Uuid;

/// Write payload for create and update. Identifier assignment stays with
/// the store.
#[derive(Debug, Clone)]
pub struct UserFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Record store for user accounts.
///
/// Handlers talk to this trait only, so the in-memory map can be swapped
/// for an external database without touching the router. `create` does not
/// check email uniqueness; callers look the email up first.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All current records, arbitrary order.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Look up a record by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Look up a record by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Store a new record under a fresh identifier and return it.
    async fn create(&self, fields: UserFields) -> Result<User>;

    /// Replace username, email, and password of an existing record.
    /// Returns `None` when no record has the given id.
    async fn update(&self, id: Uuid, fields: UserFields) -> Result<Option<User>>;

    /// Delete a record. Returns whether a record was removed.
    async fn remove(&self, id: Uuid) -> Result<bool>;

    /// Return the user for `email` only when the stored password equals
    /// `password` exactly.
    async fn compare_password(&self, email: &str, password: &str) -> Result<Option<User>>;
}
