use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub invoice: InvoiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm); served when present
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: None,
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// Реквизиты продавца, печатаются в шапке счёта
#[derive(Debug, Deserialize, Clone)]
pub struct InvoiceConfig {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default)]
    pub company_address: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            company_address: String::new(),
        }
    }
}

fn default_company_name() -> String {
    "Order Admin".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "db/orders.db"

[server]
port = 3000

[invoice]
company_name = "Order Admin"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return parse_config(&std::fs::read_to_string(&config_path)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Stores the loaded configuration for the lifetime of the process.
pub fn init(config: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration already initialized"))?;
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("Configuration not initialized"))
}

/// Реквизиты для счёта; встроенные значения, если конфиг ещё не загружен
pub fn invoice_config() -> InvoiceConfig {
    CONFIG
        .get()
        .map(|c| c.invoice.clone())
        .unwrap_or_default()
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(&config.database.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "db/orders.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.invoice.company_name, "Order Admin");
    }

    #[test]
    fn test_optional_sections_fall_back() {
        let config = parse_config("[database]\npath = \"/tmp/x.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.server.static_dir.is_none());
        assert_eq!(config.invoice.company_address, "");
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/tmp/x.db")
        );
    }

    #[test]
    fn test_missing_database_section_is_error() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
    }
}
