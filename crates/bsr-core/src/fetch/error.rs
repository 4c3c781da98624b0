//! Fetch failure taxonomy.

use thiserror::Error;

/// Why the playlist could not be fetched. All variants end the operation the same
/// way; they stay distinct for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Response arrived with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    Status(u32),
    /// The request could not complete (DNS, connect, TLS, reset, bad URL).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    /// The body is not a playlist feed.
    #[error("malformed playlist body: {0}")]
    Parse(#[from] serde_json::Error),
    /// The blocking transfer task panicked or was cancelled.
    #[error("fetch task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "HTTP error! Status: 500"
        );
    }

    #[test]
    fn parse_message_mentions_body() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("malformed playlist body"));
    }
}
