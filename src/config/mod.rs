use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::contact::FormEndpoint;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data directory for the log file
    pub data_dir: PathBuf,

    /// Catalog file replacing the built-in content
    pub catalog_path: Option<PathBuf>,

    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Tick interval of the event loop in milliseconds
    pub tick_rate_ms: u64,

    /// Where the contact form submits to
    pub form: FormEndpoint,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .map(|dir| dir.join("fieldfolio"))
                .unwrap_or_else(|| PathBuf::from("./data")),
            catalog_path: None,
            mouse_enabled: true,
            tick_rate_ms: 250,
            form: FormEndpoint::default(),
        }
    }
}

impl Config {
    /// Initialize configuration from various sources
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = match Self::load_from_file().await? {
            Some(file_config) => file_config,
            None => Self::default(),
        };

        // Environment wins over files
        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        if let Ok(path) = std::env::var("FIELDFOLIO_CATALOG") {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Ok(data_dir) = std::env::var("FIELDFOLIO_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(mouse) = std::env::var("FIELDFOLIO_MOUSE") {
            self.mouse_enabled = mouse.to_lowercase() != "false";
        }

        if let Ok(tick_str) = std::env::var("FIELDFOLIO_TICK_MS") {
            if let Ok(tick) = tick_str.parse() {
                self.tick_rate_ms = tick;
            }
        }

        if let Ok(endpoint) = std::env::var("FIELDFOLIO_FORM_ENDPOINT") {
            self.form.url = endpoint;
        }
    }

    /// Candidate configuration files, highest priority first
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.fieldfolio.json"),
            PathBuf::from("./fieldfolio.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("fieldfolio").join("fieldfolio.json"));
        }

        paths
    }

    /// Load the first configuration file that exists
    pub async fn load_from_file() -> Result<Option<Self>> {
        for path in Self::config_paths() {
            if path.exists() {
                return Self::load_from_path(&path).await.map(Some);
            }
        }
        Ok(None)
    }

    pub async fn load_from_path(path: &std::path::Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid configuration in {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Path of the log file used in interactive mode
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("fieldfolio.log")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(anyhow::anyhow!("tick_rate_ms must be greater than 0"));
        }

        self.form.parse()?;

        Ok(())
    }
}
