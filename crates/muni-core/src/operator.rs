//! # Operator Identity
//!
//! The console is operated by a single ward administrator. Audit entries
//! record this fixed identity as the actor of every action; there is no
//! multi-user model.

use serde::{Deserialize, Serialize};

/// The administrator identity recorded on audit entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// Display name (e.g. "Admin User").
    pub name: String,
    /// Role title (e.g. "Ward Administrator").
    pub role: String,
}

impl Operator {
    /// Construct an operator identity.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

impl Default for Operator {
    /// The demo ward administrator identity.
    fn default() -> Self {
        Self::new("Admin User", "Ward Administrator")
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let op = Operator::default();
        assert_eq!(op.name, "Admin User");
        assert_eq!(op.to_string(), "Admin User (Ward Administrator)");
    }
}
