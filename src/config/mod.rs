pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fashion-filter")]
#[command(about = "Read-only fashion catalog HTTP API with filtering, sorting and pagination")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog JSON file (overrides [catalog].data_path)
    #[arg(long)]
    pub data_file: Option<String>,

    /// Listen host (overrides [service].host)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides [service].port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Default page size when a request omits page_size
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Load and validate the catalog, print a summary, then exit
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML（若有指定）並套用命令列覆蓋設定：CLI > TOML > 預設值
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(data_file) = &self.data_file {
            config.catalog.data_path = data_file.clone();
        }
        if let Some(host) = &self.host {
            config.service.host = host.clone();
        }
        if let Some(port) = self.port {
            config.service.port = port;
        }
        if let Some(page_size) = self.page_size {
            config.pagination.default_page_size = page_size;
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = CliConfig::parse_from([
            "fashion-filter",
            "--data-file",
            "items.json",
            "--port",
            "9000",
            "--page-size",
            "24",
            "--json-logs",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.catalog.data_path, "items.json");
        assert_eq!(config.service.port, 9000);
        assert_eq!(config.service.host, "0.0.0.0");
        assert_eq!(config.pagination.default_page_size, 24);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig::parse_from(["fashion-filter", "--config", "/nonexistent/catalog.toml"]);
        assert!(cli.resolve().is_err());
    }
}
