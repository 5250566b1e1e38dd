use std::sync::Arc;

use crate::config::Config;
use crate::sheets::SheetSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where section exports are read from. Default: `HttpSheetSource`.
    pub sheets: Arc<dyn SheetSource>,
    pub config: Config,
}
