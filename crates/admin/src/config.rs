//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BACKEND_PROJECT_ID` - Managed backend project identifier
//! - `BACKEND_API_KEY` - Managed backend client API key
//!
//! ## Optional
//! - `BACKEND_REGION` - Backend region (default: us-central)
//! - `ADMIN_SESSION_MINUTES` - Idle minutes before the panel asks for a
//!   fresh sign-in (default: 60)

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_BACKEND_REGION: &str = "us-central";
const DEFAULT_SESSION_MINUTES: u32 = 60;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Managed backend connection settings.
    pub backend: BackendConfig,
    /// Idle minutes before re-authentication.
    pub session_minutes: u32,
}

/// Managed backend connection settings.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct BackendConfig {
    /// Backend project identifier.
    pub project_id: String,
    /// Backend region.
    pub region: String,
    /// Client API key.
    pub api_key: SecretString,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the API key looks like an unfilled placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let session_minutes = match std::env::var("ADMIN_SESSION_MINUTES") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvVar("ADMIN_SESSION_MINUTES".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_SESSION_MINUTES,
        };

        Ok(Self {
            backend: BackendConfig::from_env()?,
            session_minutes,
        })
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: get_required_env("BACKEND_PROJECT_ID")?,
            region: get_env_or_default("BACKEND_REGION", DEFAULT_BACKEND_REGION),
            api_key: get_validated_secret("BACKEND_API_KEY")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required secret, rejecting obvious placeholder values.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    let secret = SecretString::from(value);
    reject_placeholder(&secret, key)?;
    Ok(secret)
}

/// Reject secrets that still contain template placeholder text.
fn reject_placeholder(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret().to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if value.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("looks like a placeholder (contains {pattern:?})"),
            ));
        }
    }
    Ok(())
}
