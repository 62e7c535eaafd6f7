//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?active=true` filter for list endpoints.
///
/// Only the literal value `true` enables the filter; any other value (or
/// none) lists everything.
#[derive(Debug, Default, Deserialize)]
pub struct ActiveFilterParams {
    pub active: Option<String>,
}

impl ActiveFilterParams {
    pub fn active_only(&self) -> bool {
        self.active.as_deref() == Some("true")
    }
}
