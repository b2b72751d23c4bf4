//! Credential resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TxError};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    credentials: HashMap<String, CredentialEntry>,
}

/// Single credential entry, keyed by host
#[derive(Deserialize, Debug)]
struct CredentialEntry {
    credential: String,
}

/// Credential resolution with fallback logic
///
/// The credential is a `username:password` string; the client base64-encodes
/// it once into the Basic authorization header.
pub struct CredentialResolver {
    host: String,
}

impl CredentialResolver {
    /// Create a new credential resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve the credential from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TX_CREDENTIAL, TRANSIFEX_CREDENTIAL - in order)
    /// 3. Credentials file (~/.config/txctl/credentials.json)
    pub fn resolve(&self, cli_credential: Option<&str>) -> Result<String> {
        if let Some(credential) = cli_credential {
            debug!("Using credential from CLI argument");
            return Ok(credential.to_string());
        }

        for env_var in credentials::CREDENTIAL_ENV_VARS {
            if let Ok(credential) = std::env::var(env_var) {
                debug!("Using credential from {} environment variable", env_var);
                return Ok(credential);
            }
        }

        debug!(
            "No credential found in environment variables {:?}, trying credentials file",
            credentials::CREDENTIAL_ENV_VARS
        );
        let credentials_path = Self::credentials_path()
            .ok_or_else(|| TxError::CredentialNotFound(self.not_found_message(None)))?;
        self.read_credentials_file(&credentials_path)
    }

    /// Read the credential for this host from a credentials file
    fn read_credentials_file(&self, credentials_path: &Path) -> Result<String> {
        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = match fs::read_to_string(credentials_path) {
            Ok(content) => content,
            Err(_) => {
                return Err(TxError::CredentialNotFound(
                    self.not_found_message(Some(credentials_path)),
                ));
            }
        };

        let creds: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            TxError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|entry| {
                debug!(
                    "Using credential from credentials file {} for host: {}",
                    credentials_path.display(),
                    self.host
                );
                entry.credential.clone()
            })
            .ok_or_else(|| {
                TxError::CredentialNotFound(self.not_found_message(Some(credentials_path)))
            })
    }

    /// Generate helpful error message when no credential is found
    fn not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::CREDENTIAL_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No credential found for host '{}'. Please provide a user:password credential using one of:\n\
             \n\
             1. CLI argument:      txctl --credential <USER:PASSWORD>\n\
             2. Environment var:   export TX_CREDENTIAL=<USER:PASSWORD>  (also: TRANSIFEX_CREDENTIAL)\n\
             3. Credentials file:  {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            credentials::FILE_PATH,
            env_vars,
            creds_info
        )
    }

    /// Path to the credentials file under the user config directory
    fn credentials_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}
