use std::sync::Arc;

use crate::catalog::resources::ResourceCatalog;
use crate::catalog::roles::RoleCatalog;
use crate::extraction::text::TextExtractor;
use crate::store::users::UserStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable PDF text extractor. Default: PdfTextExtractor. CPU-bound,
    /// so handlers run it via `spawn_blocking`.
    pub extractor: Arc<dyn TextExtractor>,
    pub users: UserStore,
    pub roles: RoleCatalog,
    pub resources: ResourceCatalog,
}
