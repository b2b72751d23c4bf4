/// Configuration constants for the Transifex API
pub mod api {
    /// Base path for Transifex API v2
    pub const BASE_PATH: &str = "/api/2";

    /// Maximum concurrent sub-requests in fan-out operations
    pub const MAX_CONCURRENT_REQUESTS: usize = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file path (relative to the user config directory)
    pub const FILE_PATH: &str = "txctl/credentials.json";

    /// Environment variable names for the credential (checked in order)
    pub const CREDENTIAL_ENV_VARS: &[&str] = &["TX_CREDENTIAL", "TRANSIFEX_CREDENTIAL"];
}

/// Default values for CLI
pub mod defaults {
    /// Default Transifex host
    pub const HOST: &str = "www.transifex.com";

    /// Default project slug
    pub const PROJECT: &str = "webmaker";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
