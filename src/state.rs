use std::sync::Arc;

use crate::{config::Config, db::ResultStore};

#[derive(Clone)]
pub struct AppState {
    pub store: ResultStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: ResultStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn total_rounds(&self) -> i32 {
        self.config.total_rounds
    }
}
