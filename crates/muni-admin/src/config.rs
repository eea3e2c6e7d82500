//! # Console Configuration
//!
//! Loaded from YAML; every field has a default matching the Ward 5 demo
//! deployment, so a partial (or absent) document works.
//!
//! ```yaml
//! operator:
//!   name: Admin User
//!   role: Ward Administrator
//! ward: Ward 5
//! expected_code: "123456"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use muni_auth::DEMO_CODE;
use muni_core::Operator;

use crate::console::ConsoleError;

/// Console settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Operator identity recorded on audit entries.
    pub operator: Operator,
    /// Ward label the console administers.
    pub ward: String,
    /// One-time code the login flow expects.
    pub expected_code: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            operator: Operator::default(),
            ward: "Ward 5".into(),
            expected_code: DEMO_CODE.into(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConsoleError> {
        serde_yaml::from_str(yaml).map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// Load a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConsoleError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConsoleError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_yaml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let config = ConsoleConfig::default();
        assert_eq!(config.operator.name, "Admin User");
        assert_eq!(config.ward, "Ward 5");
        assert_eq!(config.expected_code, DEMO_CODE);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ConsoleConfig::from_yaml_str("ward: Ward 12\n").unwrap();
        assert_eq!(config.ward, "Ward 12");
        assert_eq!(config.expected_code, DEMO_CODE);
        assert_eq!(config.operator.role, "Ward Administrator");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "\
operator:
  name: Kavitha Raman
  role: Zonal Officer
ward: Ward 7
expected_code: \"424242\"
";
        let config = ConsoleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.operator.name, "Kavitha Raman");
        assert_eq!(config.expected_code, "424242");
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(ConsoleConfig::from_yaml_str(": not yaml [").is_err());
    }
}
