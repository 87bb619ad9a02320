//! Configuration management for Fieldvault
//!
//! Loads configuration with priority:
//! 1. fieldvault.toml (or specified config file)
//! 2. Environment variables (`${VAR_NAME}` references)
//! 3. Defaults

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fieldvault configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Blob storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend (filesystem or memory)
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    /// Root directory for the filesystem backend (can reference env vars
    /// with `${VAR_NAME}`)
    #[serde(default = "default_storage_root")]
    pub root: String,
}

/// Available blob storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Filesystem,
    Memory,
}

/// REST host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Observability configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub service_name: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            root: default_storage_root(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl VaultConfig {
    /// Load configuration with the following priority:
    /// 1. Specified config file (if provided)
    /// 2. fieldvault.toml in current directory or parents
    /// 3. Environment variables (for `${VAR_NAME}` references)
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: VaultConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        config.resolve_env_vars();

        Ok(config)
    }

    /// Find fieldvault.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join("fieldvault.toml");
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!(
            "fieldvault.toml not found. Create one or pass an explicit path to load_from()"
        ))
    }

    /// Resolve `${VAR_NAME}` references to environment variables
    fn resolve_env_vars(&mut self) {
        if let Some(resolved) = Self::resolve_env_var(&self.storage.root) {
            self.storage.root = resolved;
        }

        if let Some(ref name) = self.observability.service_name {
            if let Some(resolved) = Self::resolve_env_var(name) {
                self.observability.service_name = Some(resolved);
            }
        }
    }

    /// Resolve a single `${VAR_NAME}` reference
    fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }

    /// Create test-friendly defaults (in-memory storage, no config file)
    pub fn test_defaults() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                root: default_storage_root(),
            },
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

fn default_backend() -> StorageBackend {
    StorageBackend::Filesystem
}

fn default_storage_root() -> String {
    "./blobs".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
