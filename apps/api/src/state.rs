use std::sync::Arc;

use crate::catalog::TemplateCatalog;
use crate::config::Config;
use crate::convert::DocumentConverter;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation capability. `None` when no credential is configured;
    /// the supported degraded mode (placeholder content, default category).
    pub llm: Option<Arc<dyn TextGenerator>>,
    /// DOCX → PDF conversion engine; swapped for a double in tests.
    pub converter: Arc<dyn DocumentConverter>,
    /// Immutable template catalog, loaded once at startup.
    pub catalog: Arc<TemplateCatalog>,
    pub config: Config,
}
