use rbfs_core::{Repository, Resource, Store};
use std::sync::Arc;

/// Application state shared across REST API handlers
///
/// Holds the store only. Repositories are cheap views over it and are built per request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn repository<R: Resource>(&self) -> Repository<R> {
        Repository::new(self.store.clone())
    }
}
