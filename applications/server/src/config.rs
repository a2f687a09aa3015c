/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_flash")]
    pub flash: FlashSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlashSettings {
    /// How long an unread flash message is kept
    #[serde(default = "default_flash_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl FlashSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `config.toml` in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. DEVROSTER_SERVER__PORT
        settings = settings.add_source(
            config::Environment::with_prefix("DEVROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must not be 0".to_string()));
        }

        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set DEVROSTER_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.flash.ttl_seconds == 0 {
            return Err(ServerError::Config(
                "Flash TTL must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/devroster.db".to_string()
}

fn default_flash() -> FlashSettings {
    FlashSettings {
        ttl_seconds: default_flash_ttl_seconds(),
    }
}

fn default_flash_ttl_seconds() -> u64 {
    300
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            flash: default_flash(),
        }
    }
}
