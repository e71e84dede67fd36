//! Server application state.

use registry::Registry;

/// Shared handler state. Holds only the registry handle; the registry
/// itself re-reads the configuration file on every request, so there is
/// no mutable state here and nothing to lock.
pub struct AppState {
    pub registry: Registry,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}
