use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to construct transport: {0}")]
    Construction(String),

    /// Every mechanism in the fallback chain was unavailable. Fatal: surfaced
    /// before any request is sent.
    #[error("No usable transport mechanism in the fallback chain")]
    NoTransport,
}
