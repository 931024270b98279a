use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Error decoding catalog data: {message}")]
    MalformedSource { message: String },

    #[error("Error processing item data at record {index}: field '{field}' = '{value}': {reason}")]
    InvalidRecord {
        index: usize,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid request parameter '{field}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid query string: {message}")]
    QueryRejected { message: String },

    #[error("Page not found")]
    PageNotFound { page: usize, total_pages: usize },

    #[error("Item not found")]
    ItemNotFound { id: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    DataSource,
    Request,
    NotFound,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::SourceNotFound { .. }
            | CatalogError::MalformedSource { .. }
            | CatalogError::InvalidRecord { .. } => ErrorCategory::DataSource,
            CatalogError::ValidationError { .. } | CatalogError::QueryRejected { .. } => {
                ErrorCategory::Request
            }
            CatalogError::PageNotFound { .. } | CatalogError::ItemNotFound { .. } => {
                ErrorCategory::NotFound
            }
            CatalogError::IoError(_) | CatalogError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單一請求失敗，不影響其他請求
            ErrorCategory::Request | ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::DataSource => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否為呼叫端造成的錯誤（4xx）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Request | ErrorCategory::NotFound
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::SourceNotFound { .. } => {
                "Check the catalog data path (--data-file or [catalog].data_path)"
            }
            CatalogError::MalformedSource { .. } => {
                "Make sure the data file is a JSON array of item objects"
            }
            CatalogError::InvalidRecord { .. } => {
                "Fix the offending record; every category, size and color must be a known value"
            }
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Review the TOML configuration file and command line flags"
            }
            CatalogError::ValidationError { .. } | CatalogError::QueryRejected { .. } => {
                "Correct the query parameters and retry"
            }
            CatalogError::PageNotFound { .. } => "Request a page between 1 and total_pages",
            CatalogError::ItemNotFound { .. } => "Check the item id",
            CatalogError::IoError(_) | CatalogError::ServerError { .. } => {
                "Check file permissions and that the listen address is free"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::SourceNotFound { path } => {
                format!("The catalog data file '{}' does not exist", path)
            }
            CatalogError::InvalidRecord { index, field, .. } => {
                format!("Catalog record #{} has an invalid '{}' field", index, field)
            }
            CatalogError::PageNotFound { page, total_pages } => {
                format!("Page {} does not exist (total pages: {})", page, total_pages)
            }
            CatalogError::ItemNotFound { id } => format!("No item with id '{}'", id),
            other => other.to_string(),
        }
    }

    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CatalogError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
