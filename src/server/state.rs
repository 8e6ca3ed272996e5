use crate::domain::ports::ContactTransport;
use std::sync::Arc;

/// Shared state for the contact handler.
#[derive(Clone)]
pub struct AppState {
    /// Downstream contact API that accepted submissions are relayed to.
    pub forwarder: Arc<dyn ContactTransport>,
}

impl AppState {
    pub fn new<T>(forwarder: T) -> Self
    where
        T: ContactTransport + 'static,
    {
        Self {
            forwarder: Arc::new(forwarder),
        }
    }
}
