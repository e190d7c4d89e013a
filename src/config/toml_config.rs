use crate::core::driver::DEFAULT_LABEL_PREFIX;
use crate::core::ProductKind;
use crate::utils::error::{FactoryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub driver: DriverConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriverConfig {
    pub sequence: Option<Vec<ProductKind>>,
    pub label_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| FactoryError::ConfigError {
            message: format!("cannot read config {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FactoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRODUCT_SEQUENCE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FactoryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(sequence) = &self.driver.sequence {
            validation::validate_non_empty_list("driver.sequence", sequence)?;
        }

        if let Some(prefix) = &self.driver.label_prefix {
            validation::validate_non_empty_string("driver.label_prefix", prefix)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", &level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn sequence(&self) -> Vec<ProductKind> {
        self.driver
            .sequence
            .clone()
            .unwrap_or_else(|| ProductKind::ALL.to_vec())
    }

    pub fn label_prefix(&self) -> &str {
        self.driver
            .label_prefix
            .as_deref()
            .unwrap_or(DEFAULT_LABEL_PREFIX)
    }

    /// 日誌等級不分大小寫，一律轉成小寫
    pub fn log_level(&self) -> Option<String> {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .map(|level| level.trim().to_ascii_lowercase())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
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
[driver]
sequence = ["B", "a", "type A"]
label_prefix = "Item"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.sequence(),
            vec![ProductKind::B, ProductKind::A, ProductKind::A]
        );
        assert_eq!(config.label_prefix(), "Item");
        assert_eq!(config.log_level().as_deref(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.sequence(), vec![ProductKind::A, ProductKind::B]);
        assert_eq!(config.label_prefix(), "Product");
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_product_kind_is_rejected() {
        let toml_content = r#"
[driver]
sequence = ["A", "C"]
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, FactoryError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FACTORY_METHOD_TEST_PREFIX", "Widget");

        let toml_content = r#"
[driver]
label_prefix = "${FACTORY_METHOD_TEST_PREFIX}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.label_prefix(), "Widget");

        std::env::remove_var("FACTORY_METHOD_TEST_PREFIX");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[driver]
label_prefix = "${FACTORY_METHOD_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.label_prefix(), "${FACTORY_METHOD_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let empty_sequence = TomlConfig::from_toml_str("[driver]\nsequence = []\n").unwrap();
        assert!(empty_sequence.validate().is_err());

        let blank_prefix = TomlConfig::from_toml_str("[driver]\nlabel_prefix = \"  \"\n").unwrap();
        assert!(blank_prefix.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[driver]
sequence = ["B"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.sequence(), vec![ProductKind::B]);
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"INFO\"\n").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.log_level().as_deref(), Some("info"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here/factory.toml").unwrap_err();

        assert!(matches!(err, FactoryError::ConfigError { .. }));
        let message = err.user_friendly_message();
        assert!(message.contains("/definitely/not/here/factory.toml"));
        assert!(!message.contains("write output"));
        assert_eq!(
            err.recovery_suggestion(),
            "Fix the configuration file or CLI flags and rerun"
        );
    }
}
