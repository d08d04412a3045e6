// Backend client stub.
// Returns fixed placeholder text until a real backend service exists.

use tracing::debug;

use crate::error::Result;

/// Client for the application backend.
#[derive(Debug, Clone, Default)]
pub struct BackendClient;

impl BackendClient {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the first placeholder text.
    pub async fn get_text1(&self) -> Result<String> {
        debug!("backend: get_text1");
        Ok("Text 1".to_string())
    }

    /// Fetch the second placeholder text.
    pub async fn get_text2(&self) -> Result<String> {
        debug!("backend: get_text2");
        Ok("Text 2".to_string())
    }
}

pub fn get_backend_client() -> BackendClient {
    BackendClient::new()
}
