use acct_store::UserStore;

use std::sync::Arc;

/// Shared handler state: the injected user store.
///
/// The store is a trait object so an alternate backing can be plugged in
/// without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}
