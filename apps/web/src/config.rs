use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Name of the credential in both the secret store and the environment.
pub const API_KEY_NAME: &str = "GOOGLE_API_KEY";

const DEFAULT_SECRETS_FILE: &str = "secrets.toml";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from the environment and the secret store.
///
/// Only malformed numeric settings fail startup. A missing credential does not:
/// it surfaces later as an authentication error from the remote service.
#[derive(Clone)]
pub struct Config {
    pub google_api_key: String,
    pub credential_source: CredentialSource,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("google_api_key", &"<redacted>")
            .field("credential_source", &self.credential_source)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_path = std::env::var("SECRETS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_FILE));
        let secrets = SecretStore::load(&secrets_path);
        let (google_api_key, credential_source) =
            resolve_credential(&secrets, std::env::var(API_KEY_NAME).ok());

        Ok(Config {
            google_api_key,
            credential_source,
            gemini_base_url: std::env::var("GEMINI_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            google_api_key: "test-key".to_string(),
            credential_source: CredentialSource::Environment,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Where the credential came from. Logged at startup in place of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    SecretStore,
    Environment,
    Missing,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CredentialSource::SecretStore => "secret store",
            CredentialSource::Environment => "environment",
            CredentialSource::Missing => "missing",
        };
        f.write_str(label)
    }
}

/// Deployment-managed secrets: a flat TOML file of string values.
#[derive(Debug, Default)]
pub struct SecretStore {
    values: HashMap<String, String>,
}

impl SecretStore {
    /// Reads the store from `path`. A missing or malformed file yields an empty store.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|e| {
                warn!("Ignoring unreadable secret store {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => {
                info!("No secret store at {}", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(raw)?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Picks the credential: secret store first, then the environment value.
/// Never fails; an absent credential resolves to an empty string.
pub fn resolve_credential(
    secrets: &SecretStore,
    env_value: Option<String>,
) -> (String, CredentialSource) {
    if let Some(key) = secrets.get(API_KEY_NAME) {
        return (key.to_string(), CredentialSource::SecretStore);
    }
    match env_value {
        Some(key) => (key, CredentialSource::Environment),
        None => (String::new(), CredentialSource::Missing),
    }
}
