//! Configuration management for the Jotter server
//!
//! This module handles loading and accessing application configuration.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use jotter_client::StoreClientConfig;

use crate::startup::LoggingConfig;

// Configuration property keys
pub const SERVER_ADDRESS: &str = "jotter.server.address";
pub const SERVER_PORT: &str = "jotter.server.port";
pub const SERVER_CONTEXT_PATH: &str = "jotter.server.context_path";
pub const STORE_MODE: &str = "jotter.store.mode";
pub const STORE_BASE_URL: &str = "jotter.store.base_url";
pub const STORE_CONNECT_TIMEOUT_MS: &str = "jotter.store.connect_timeout_ms";
pub const STORE_READ_TIMEOUT_MS: &str = "jotter.store.read_timeout_ms";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "jotter.shutdown.timeout_secs";
pub const LOGGING_LEVEL: &str = "jotter.logging.level";
pub const LOGGING_STDOUT: &str = "jotter.logging.stdout";
pub const LOGGING_DIR: &str = "jotter.logging.dir";
pub const LOGGING_FILE_NAME: &str = "jotter.logging.file_name";
pub const LOGGING_ROTATION: &str = "jotter.logging.rotation";

// Supported document store modes
pub const STORE_MODE_REMOTE: &str = "remote";
pub const STORE_MODE_MEMORY: &str = "memory";

// Defaults
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_CONTEXT_PATH: &str = "/api";
pub const DEFAULT_STORE_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_STORE_CONNECT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_STORE_READ_TIMEOUT_MS: u64 = 30000;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "store-url", env = "JOTTER_STORE_URL")]
    store_url: Option<String>,
    #[arg(long = "store-mode")]
    store_mode: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("jotter")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml"));

        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT, v)
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.store_url {
            config_builder = config_builder
                .set_override(STORE_BASE_URL, v)
                .expect("Failed to set store URL override");
        }
        if let Some(v) = args.store_mode {
            config_builder = config_builder
                .set_override(STORE_MODE, v)
                .expect("Failed to set store mode override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT)
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    pub fn server_context_path(&self) -> String {
        self.config
            .get_string(SERVER_CONTEXT_PATH)
            .unwrap_or(DEFAULT_CONTEXT_PATH.to_string())
    }

    // ========================================================================
    // Document Store Configuration
    // ========================================================================

    pub fn store_mode(&self) -> String {
        self.config
            .get_string(STORE_MODE)
            .unwrap_or(STORE_MODE_REMOTE.to_string())
    }

    pub fn store_base_url(&self) -> String {
        self.config
            .get_string(STORE_BASE_URL)
            .unwrap_or(DEFAULT_STORE_BASE_URL.to_string())
    }

    pub fn store_connect_timeout_ms(&self) -> u64 {
        self.config
            .get_int(STORE_CONNECT_TIMEOUT_MS)
            .unwrap_or(DEFAULT_STORE_CONNECT_TIMEOUT_MS as i64) as u64
    }

    pub fn store_read_timeout_ms(&self) -> u64 {
        self.config
            .get_int(STORE_READ_TIMEOUT_MS)
            .unwrap_or(DEFAULT_STORE_READ_TIMEOUT_MS as i64) as u64
    }

    pub fn store_client_config(&self) -> StoreClientConfig {
        StoreClientConfig::new(&self.store_base_url())
            .with_timeouts(self.store_connect_timeout_ms(), self.store_read_timeout_ms())
    }

    // ========================================================================
    // Shutdown Configuration
    // ========================================================================

    pub fn shutdown_timeout(&self) -> Duration {
        let secs = self
            .config
            .get_int(SHUTDOWN_TIMEOUT_SECS)
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS as i64) as u64;

        Duration::from_secs(secs)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGGING_LEVEL).ok(),
            self.config.get_string(LOGGING_DIR).ok(),
            self.config.get_string(LOGGING_FILE_NAME).ok(),
            self.config.get_string(LOGGING_ROTATION).ok(),
            self.config.get_bool(LOGGING_STDOUT).ok(),
        )
    }
}
