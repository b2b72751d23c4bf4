use std::fmt;

/// Custom error type for Transifex API operations
#[derive(Debug)]
pub enum TxError {
    /// HTTP request failed at the transport level
    Http(reqwest::Error),
    /// API returned a non-200 response
    Api { url: String, status: u16 },
    /// Credential not found in any source
    CredentialNotFound(String),
    /// Failed to read or parse the credentials file
    Credentials(String),
    /// Response body is not valid JSON
    Json(String),
    /// Caller supplied an unknown locale, resource or contributor kind
    Validation(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TxError::Api { url, status } => write!(f, "{} returned {}", url, status),
            TxError::CredentialNotFound(msg) => write!(f, "{}", msg),
            TxError::Credentials(msg) => write!(f, "{}", msg),
            TxError::Json(msg) => write!(f, "JSON error: {}", msg),
            TxError::Validation(msg) => write!(f, "{}", msg),
            TxError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TxError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TxError {
    fn from(err: reqwest::Error) -> Self {
        TxError::Http(err)
    }
}

impl From<serde_json::Error> for TxError {
    fn from(err: serde_json::Error) -> Self {
        TxError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TxError {
    fn from(err: std::io::Error) -> Self {
        TxError::Credentials(err.to_string())
    }
}

/// Result type alias for Transifex operations
pub type Result<T> = std::result::Result<T, TxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_url_and_status() {
        let err = TxError::Api {
            url: "https://www.transifex.com/api/2/project/webmaker/".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("/api/2/project/webmaker/"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = TxError::Validation("Unknown locale's name 'xx'".to_string());
        assert_eq!(err.to_string(), "Unknown locale's name 'xx'");
    }

    #[test]
    fn test_json_error_display() {
        let err = TxError::Json("expected value at line 1".to_string());
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_config_error_display() {
        let err = TxError::Config("missing host".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing host"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: TxError = json_err.into();
        match err {
            TxError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected TxError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TxError = io_err.into();
        match err {
            TxError::Credentials(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected TxError::Credentials"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify TxError is Send + Sync for async usage
        assert_send_sync::<TxError>();
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = TxError::Api {
            url: "https://example.com".to_string(),
            status: 500,
        };
        assert!(err.source().is_none());
    }
}
