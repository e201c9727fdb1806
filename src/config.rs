use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CheckitError, Result};

pub const CONFIG_FILE: &str = "checkit.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CheckitConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverrides>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_true")]
    pub compression: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub server: Option<PartialServerConfig>,
    #[serde(default)]
    pub rate_limit: Option<PartialRateLimitConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialServerConfig {
    pub addr: Option<String>,
    pub allowed_origins: Option<Vec<String>>,
    pub compression: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialRateLimitConfig {
    pub enabled: Option<bool>,
    pub window_secs: Option<u64>,
    pub max_requests: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_window_secs() -> u64 {
    15 * 60
}

fn default_max_requests() -> u32 {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            allowed_origins: Vec::new(),
            body_limit_bytes: default_body_limit(),
            compression: default_true(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            window_secs: default_window_secs(),
            max_requests: default_max_requests(),
        }
    }
}

impl CheckitConfig {
    /// `checkit.toml` from the working directory, defaults when absent.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: CheckitConfig =
            toml::from_str(&content).map_err(|e| CheckitError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PORT` and `ALLOWED_ORIGINS` from the environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_env_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("ALLOWED_ORIGINS").ok().as_deref(),
        )
    }

    fn with_env_values(mut self, port: Option<&str>, origins: Option<&str>) -> Result<Self> {
        if let Some(port) = port {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| CheckitError::Config(format!("Invalid PORT '{port}'")))?;
            let mut addr = self.socket_addr()?;
            addr.set_port(port);
            self.server.addr = addr.to_string();
        }
        if let Some(origins) = origins {
            self.server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_profile(mut self, profile_name: &str) -> Self {
        if let Some(overrides) = self.profiles.get(profile_name).cloned() {
            if let Some(server) = overrides.server {
                if let Some(v) = server.addr {
                    self.server.addr = v;
                }
                if let Some(v) = server.allowed_origins {
                    self.server.allowed_origins = v;
                }
                if let Some(v) = server.compression {
                    self.server.compression = v;
                }
            }
            if let Some(rate_limit) = overrides.rate_limit {
                if let Some(v) = rate_limit.enabled {
                    self.rate_limit.enabled = v;
                }
                if let Some(v) = rate_limit.window_secs {
                    self.rate_limit.window_secs = v;
                }
                if let Some(v) = rate_limit.max_requests {
                    self.rate_limit.max_requests = v;
                }
            }
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server.addr.parse().map_err(|e| {
            CheckitError::Config(format!("Invalid server address '{}': {e}", self.server.addr))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if self.rate_limit.window_secs == 0 {
            return Err(CheckitError::Config(
                "rate_limit.window_secs must be greater than zero".to_string(),
            ));
        }
        if self.rate_limit.max_requests == 0 {
            return Err(CheckitError::Config(
                "rate_limit.max_requests must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
