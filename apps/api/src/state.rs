use std::sync::Arc;

use crate::generation::backend::TextBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text backend. Default: TemplateBackend. Swapped to Claude
    /// at startup when ANTHROPIC_API_KEY is set.
    pub backend: Arc<dyn TextBackend>,
}
