use std::fmt;

use super::InstallError;

/// A validated component identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumeric characters or `-`
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(value: &str) -> Result<Self, InstallError> {
        if value.is_empty()
            || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(InstallError::InvalidComponentId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ComponentId> for String {
    fn from(val: ComponentId) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_alphanumeric_id() {
        assert!(ComponentId::new("button").is_ok());
    }

    #[test]
    fn valid_id_with_dashes() {
        assert!(ComponentId::new("alert-dialog").is_ok());
    }

    #[test]
    fn empty_id_is_invalid() {
        assert!(ComponentId::new("").is_err());
    }

    #[test]
    fn slash_in_id_is_invalid() {
        assert!(ComponentId::new("ui/button").is_err());
    }

    #[test]
    fn dot_dot_is_invalid() {
        assert!(ComponentId::new("..").is_err());
    }

    #[test]
    fn underscore_is_invalid() {
        assert!(ComponentId::new("alert_dialog").is_err());
    }

    #[test]
    fn lookup_is_case_sensitive_at_the_id_level() {
        // Uppercase is a valid spelling; whether it resolves is the
        // registry's exact-match concern, not the identifier's.
        assert!(ComponentId::new("Button").is_ok());
    }

    #[test]
    fn display_impl() {
        let id = ComponentId::new("skeleton").unwrap();
        assert_eq!(format!("{}", id), "skeleton");
    }
}
