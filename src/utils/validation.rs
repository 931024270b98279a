use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

// 以下為請求參數驗證，失敗時回傳 ValidationError（HTTP 422）

pub fn require_in_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<T> {
    if value < min || value > max {
        return Err(CatalogError::validation(
            field_name,
            value,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(value)
}

pub fn require_finite(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CatalogError::validation(
            field_name,
            value,
            "must be a finite number",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.data_path", "data_items.json").is_ok());
        assert!(validate_path("catalog.data_path", "").is_err());
        assert!(validate_path("catalog.data_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("service.port", 8000, 1).is_ok());
        assert!(validate_positive_number("service.port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }

    #[test]
    fn test_require_in_range_is_request_error() {
        assert_eq!(require_in_range("min_rating", 4.5, 0.0, 5.0).unwrap(), 4.5);
        assert_eq!(require_in_range("min_rating", 0.0, 0.0, 5.0).unwrap(), 0.0);

        let err = require_in_range("min_rating", 5.5, 0.0, 5.0).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("min_rating"));
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("min_price", 10.0).is_ok());
        assert!(require_finite("min_price", f64::NAN).is_err());
        assert!(require_finite("max_price", f64::INFINITY).is_err());
    }
}
