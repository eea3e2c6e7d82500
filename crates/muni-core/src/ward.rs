//! # Ward Labels
//!
//! A `Ward` identifies the municipal subdivision a record belongs to
//! (e.g. "Ward 5"). The label is free text but may not be empty — records
//! without a ward cannot be routed to an administrator.

use serde::{Deserialize, Serialize};

use crate::error::MuniError;

/// A validated, non-empty ward label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ward(String);

impl Ward {
    /// Construct a ward label, rejecting empty or whitespace-only input.
    pub fn new(label: impl Into<String>) -> Result<Self, MuniError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(MuniError::Validation("ward label must not be empty".into()));
        }
        Ok(Self(label))
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_label() {
        let ward = Ward::new("Ward 5").unwrap();
        assert_eq!(ward.as_str(), "Ward 5");
        assert_eq!(ward.to_string(), "Ward 5");
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(Ward::new("").is_err());
        assert!(Ward::new("   ").is_err());
    }
}
