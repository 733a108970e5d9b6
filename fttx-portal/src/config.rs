use serde::Deserialize;
use std::fs;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVICE: &str = "nc-fttx-portal";
pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    // Service identity reported by /health.
    pub service: Option<String>,
    pub version: Option<String>,
    // Path to the HTML page template. A missing file is fatal at startup.
    pub template_path: Option<String>,
    // Directory served under /static.
    pub static_dir: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Loads the config file named by `FTTX_PORTAL_CONFIG` (default
    /// `config.toml`). A missing file is not an error; every field has a
    /// default and the service runs fine unconfigured.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("FTTX_PORTAL_CONFIG").unwrap_or_else(|_| "config.toml".into());
        if std::path::Path::new(&path).exists() {
            Config::from_file(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn service(&self) -> String {
        self.service.clone().unwrap_or_else(|| DEFAULT_SERVICE.into())
    }

    pub fn version(&self) -> String {
        self.version.clone().unwrap_or_else(|| DEFAULT_VERSION.into())
    }

    pub fn template_path(&self) -> String {
        self.template_path
            .clone()
            .unwrap_or_else(|| "web/templates/index.html".into())
    }

    pub fn static_dir(&self) -> String {
        self.static_dir.clone().unwrap_or_else(|| "web/static".into())
    }
}

/// Resolves the listening port from a `PORT` env value. Unset or empty means
/// the default 8080; anything else must parse as a port number.
pub fn resolve_port(value: Option<String>) -> anyhow::Result<u16> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(s) if s.is_empty() => Ok(DEFAULT_PORT),
        Some(s) => s
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid PORT value '{}': {}", s, e)),
    }
}
