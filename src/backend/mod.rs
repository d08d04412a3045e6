// Backend module.
// Placeholder client for the application's future backend service.

pub mod client;

pub use client::{BackendClient, get_backend_client};
