//! Host startup and serve errors.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
