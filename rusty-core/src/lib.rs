use std::sync::Arc;

use twilight_http::Client;

use rusty_pages::SessionRegistry;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    /// Live pagination sessions, keyed by the ID embedded in component custom IDs.
    pub sessions: SessionRegistry,
}

impl Context {
    /// Create a new application context with an empty session registry.
    pub fn new(http: Arc<Client>) -> Self {
        Self {
            http,
            sessions: SessionRegistry::new(),
        }
    }
}
