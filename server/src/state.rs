use std::sync::Arc;

use crate::{
    config::Config,
    store::{SharedStore, TodoStore},
};

/// Dependencies handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    /// State with a fresh, empty store.
    pub fn new(config: Config) -> Self {
        Self::with_store(config, TodoStore::shared())
    }

    pub fn with_store(config: Config, store: SharedStore) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
