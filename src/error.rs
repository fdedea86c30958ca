use thiserror::Error;

/// Routing parameters missing from the [`Config`](crate::config::Config).
/// Detected before any request is built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no bucket configured")]
    MissingBucket,
    #[error("no org configured")]
    MissingOrg,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("failed to build write request (uri={uri:?}): {source}")]
    RequestConstruction {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write (uri={uri:?}): {source}")]
    Transport {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("expected status 204, got status {status} (uri={uri:?})")]
    UnexpectedStatus {
        status: u16,
        body: String,
        uri: String,
    },
}

impl WriteError {
    /// The HTTP status the server answered with, or 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            WriteError::UnexpectedStatus { status, .. } => *status,
            _ => 0,
        }
    }

    /// The response body returned alongside an unexpected status, empty otherwise.
    pub fn body(&self) -> &str {
        match self {
            WriteError::UnexpectedStatus { body, .. } => body,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigurationError, WriteError};

    #[test]
    fn test_configuration_error_messages() {
        assert_eq!(
            WriteError::from(ConfigurationError::MissingBucket).to_string(),
            "no bucket configured"
        );
        assert_eq!(
            WriteError::from(ConfigurationError::MissingOrg).to_string(),
            "no org configured"
        );
        assert_eq!(WriteError::from(ConfigurationError::MissingOrg).status(), 0);
    }

    #[test]
    fn test_unexpected_status_carries_response() {
        let error = WriteError::UnexpectedStatus {
            status: 500,
            body: "internal error".to_string(),
            uri: "http://localhost:8086/api/v2/write?&org=o&bucket=b".to_string(),
        };

        assert_eq!(error.status(), 500);
        assert_eq!(error.body(), "internal error");
        assert_eq!(
            error.to_string(),
            "expected status 204, got status 500 (uri=\"http://localhost:8086/api/v2/write?&org=o&bucket=b\")"
        );
    }
}
