use std::sync::Arc;

use crate::matching::catalog::Catalog;
use crate::recommender::Recommender;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only scholarship catalog, built once at startup.
    pub catalog: Arc<Catalog>,
    pub profiles: Arc<dyn ProfileStore>,
    /// Remote recommendation source. `None` means local evaluation only.
    pub recommender: Option<Arc<dyn Recommender>>,
}
