use std::sync::Arc;

use super::{config::Config, reviews::ReviewStore};

pub struct AppState {
    pub config: Config,
    pub reviews: ReviewStore,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let reviews = ReviewStore::new(config.feedback_max_len, config.max_stored_reviews);

        Arc::new(Self { config, reviews })
    }
}
