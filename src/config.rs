use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "HEARTH_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "hearth.yaml";
/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, `host:port`.
    pub listen_addr: String,
    /// Pending connections queued by the OS before `accept`.
    pub backlog: u32,
    /// Upper bound on the bytes read from a single request.
    pub read_buffer_size: usize,
    pub mode: ServeMode,
}

/// How accepted connections are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// Each connection is served to completion before the next accept.
    #[default]
    Sequential,
    /// Each connection runs in its own task.
    Concurrent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directory request paths are resolved against.
    pub root: PathBuf,
    /// Document served when the request names no path.
    pub index: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            backlog: 10,
            read_buffer_size: 1024,
            mode: ServeMode::Sequential,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index: "index.html".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `$HEARTH_CONFIG`, falling back to
    /// `hearth.yaml` if it exists and to built-in defaults otherwise.
    /// `$LISTEN` overrides the listen address in every case.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_yaml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw).context("failed to parse YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.read_buffer_size == 0 {
            bail!("server.read_buffer_size must be greater than zero");
        }
        if self.server.backlog == 0 {
            bail!("server.backlog must be greater than zero");
        }
        if self.static_files.index.is_empty() {
            bail!("static_files.index must not be empty");
        }
        Ok(())
    }
}
