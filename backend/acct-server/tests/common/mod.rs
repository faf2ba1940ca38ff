#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_server::AppState;

use acct_core::User;
use acct_store::{MemoryUserStore, UserFields};

use std::sync::Arc;

/// Create AppState backed by a fresh in-memory store
pub fn create_test_app_state() -> AppState {
    AppState {
        store: Arc::new(MemoryUserStore::new()),
    }
}

/// Create a test user directly in the store
pub async fn create_test_user(state: &AppState, username: &str, email: &str, password: &str) -> User {
    state
        .store
        .create(UserFields {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .expect("Failed to create test user")
}
