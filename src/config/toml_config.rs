use crate::core::paginate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_positive_number,
    validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub catalog: CatalogConfig,
    pub pagination: PaginationConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "Fashion Filter Service API".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: "data_items.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::ConfigError {
            message: format!(
                "Cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_PATH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("service.name", &self.service.name)?;
        validate_non_empty_string("service.host", &self.service.host)?;
        validate_positive_number("service.port", usize::from(self.service.port), 1)?;

        validate_path("catalog.data_path", &self.catalog.data_path)?;

        validate_range(
            "pagination.default_page_size",
            self.pagination.default_page_size,
            1,
            MAX_PAGE_SIZE,
        )?;

        for origin in &self.cors.allow_origins {
            validate_non_empty_string("cors.allow_origins", origin)?;
        }

        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl ConfigProvider for TomlConfig {
    fn service_name(&self) -> &str {
        &self.service.name
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }

    fn data_path(&self) -> &str {
        &self.catalog.data_path
    }

    fn default_page_size(&self) -> usize {
        self.pagination.default_page_size
    }

    fn allowed_origins(&self) -> &[String] {
        &self.cors.allow_origins
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[service]
name = "catalog"
host = "127.0.0.1"
port = 8080

[catalog]
data_path = "./data/items.json"

[pagination]
default_page_size = 24

[cors]
allow_origins = ["http://localhost:3000"]

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.data_path(), "./data/items.json");
        assert_eq!(config.default_page_size(), 24);
        assert_eq!(config.allowed_origins(), ["http://localhost:3000".to_string()]);
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.data_path(), "data_items.json");
        assert_eq!(config.default_page_size(), 12);
        assert_eq!(config.allowed_origins(), ["*".to_string()]);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FASHION_FILTER_TEST_DATA", "/srv/catalog.json");

        let toml_content = r#"
[catalog]
data_path = "${FASHION_FILTER_TEST_DATA}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.data_path, "/srv/catalog.json");

        std::env::remove_var("FASHION_FILTER_TEST_DATA");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[catalog]
data_path = "${FASHION_FILTER_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.data_path, "${FASHION_FILTER_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[pagination]\ndefault_page_size = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[pagination]\ndefault_page_size = 101\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[service]\nport = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[catalog]\ndata_path = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[service\nport = 1").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nname = \"file-test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.service_name(), "file-test");
    }
}
