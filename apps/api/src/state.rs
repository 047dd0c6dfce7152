use std::sync::Arc;

use crate::config::Config;
use crate::fetch::PageFetcher;
use crate::llm_client::Completions;

/// Shared application state injected into all route handlers via Axum
/// extractors. The fetcher and completion client sit behind trait objects
/// so tests can drive the handlers with stubs.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub llm: Arc<dyn Completions>,
    pub config: Config,
}
