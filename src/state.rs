//! Shared application state.

use std::sync::Arc;

use crate::handlers::Handler;

/// Shared application state accessible to all requests
#[derive(Clone)]
pub struct AppState {
    /// Composed redirect chain, ending in the fallback
    pub handler: Arc<dyn Handler>,
}

impl AppState {
    /// Wraps `handler` for sharing across requests
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}
