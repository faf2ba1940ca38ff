//! In-memory user store backed by a hash map.

use crate::{Result, UserFields, UserStore};

use acct_core::User;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Default store backing: a process-local map keyed by user id.
///
/// Every operation takes the lock exactly once, so individual calls are
/// atomic with respect to each other. A sequence of calls is not; the
/// check-then-create in registration can interleave.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, fields: UserFields) -> Result<User> {
        let user = User::new(fields.username, fields.email, fields.password);

        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: Uuid, fields: UserFields) -> Result<Option<User>> {
        let mut users = self.users.write().await;

        Ok(users.get_mut(&id).map(|user| {
            user.username = fields.username;
            user.email = fields.email;
            user.password = fields.password;
            user.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn compare_password(&self, email: &str, password: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }
}
