use crate::utils::error::{FactoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FactoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(FactoryError::ConfigValidationError {
            field: field_name.to_string(),
            message: "List must contain at least one entry".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FactoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("driver.label_prefix", "Product").is_ok());
        assert!(validate_non_empty_string("driver.label_prefix", "").is_err());
        assert!(validate_non_empty_string("driver.label_prefix", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("driver.sequence", &[1, 2]).is_ok());
        assert!(validate_non_empty_list::<u8>("driver.sequence", &[]).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["info", "debug"];
        assert!(validate_one_of("logging.level", "info", &levels).is_ok());

        let err = validate_one_of("logging.level", "loud", &levels).unwrap_err();
        assert!(err.to_string().contains("loud"));
    }
}
