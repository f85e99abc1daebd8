use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, TonnageError};
use crate::utils::validation::{validate_positive, validate_range, Validate};

/// Parameters for the processing-loss analysis. Production records only carry
/// tonnage, so grade, recovery and price come from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossConfig {
    #[serde(default = "default_gold_price")]
    pub gold_price_usd_per_kg: f64,

    /// Fraction of contained gold the plant recovers, 0 to 1.
    #[serde(default = "default_recovery_rate")]
    pub recovery_rate: f64,

    /// Grade assumed for lost tonnage, grams per tonne.
    #[serde(default = "default_grade")]
    pub default_grade_g_t: f64,
}

fn default_gold_price() -> f64 {
    75_000.0
}

fn default_recovery_rate() -> f64 {
    0.9
}

fn default_grade() -> f64 {
    1.5
}

impl Default for LossConfig {
    fn default() -> Self {
        Self {
            gold_price_usd_per_kg: default_gold_price(),
            recovery_rate: default_recovery_rate(),
            default_grade_g_t: default_grade(),
        }
    }
}

impl LossConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TonnageError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TonnageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for LossConfig {
    fn validate(&self) -> Result<()> {
        validate_positive("gold_price_usd_per_kg", self.gold_price_usd_per_kg)?;
        validate_range("recovery_rate", self.recovery_rate, 0.0, 1.0)?;
        validate_positive("default_grade_g_t", self.default_grade_g_t)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
gold_price_usd_per_kg = 68000.0
recovery_rate = 0.85
default_grade_g_t = 2.1
"#;

        let config = LossConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.gold_price_usd_per_kg, 68000.0);
        assert_eq!(config.recovery_rate, 0.85);
        assert_eq!(config.default_grade_g_t, 2.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = LossConfig::from_toml_str("recovery_rate = 0.8\n").unwrap();
        assert_eq!(config.recovery_rate, 0.8);
        assert_eq!(config.gold_price_usd_per_kg, 75_000.0);
        assert_eq!(config.default_grade_g_t, 1.5);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_GOLD_PRICE", "81000.0");

        let config =
            LossConfig::from_toml_str("gold_price_usd_per_kg = ${TEST_GOLD_PRICE}\n").unwrap();
        assert_eq!(config.gold_price_usd_per_kg, 81000.0);

        std::env::remove_var("TEST_GOLD_PRICE");
    }

    #[test]
    fn test_validation_rejects_bad_recovery() {
        let config = LossConfig {
            recovery_rate: 1.2,
            ..LossConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"gold_price_usd_per_kg = 70000.0\n")
            .unwrap();

        let config = LossConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.gold_price_usd_per_kg, 70000.0);
    }
}
