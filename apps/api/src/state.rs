use std::sync::Arc;

use crate::recommendation::recommender::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; the dataset and model client live inside the recommender.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}
