//! Error taxonomy for the MyMoodAI client.

use std::path::PathBuf;

/// Errors from the MyMoodAI REST client.
#[derive(Debug, thiserror::Error)]
pub enum MyMoodAIError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// MyMoodAI returned a non-2xx status code, or a 2xx body that
    /// reports a failure.
    #[error("MyMoodAI API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The response body was not valid JSON or did not match the
    /// expected shape.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A training image could not be read from local storage.
    #[error("Failed to read training image {}: {source}", .path.display())]
    LocalIo {
        /// Path that was passed to the upload call.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
