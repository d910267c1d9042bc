use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::layout::PageGeometry;
use crate::models::document::CvDocument;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one CV being edited. Lives for the lifetime of the process.
    pub document: Arc<RwLock<CvDocument>>,
    pub config: Config,
    /// Page the preview and print views lay the CV out on.
    pub page: PageGeometry,
}

impl AppState {
    pub fn new(config: Config, page: PageGeometry) -> Self {
        AppState {
            document: Arc::new(RwLock::new(CvDocument::new())),
            config,
            page,
        }
    }
}
