//! Validation helpers for configuration values.

use crate::{Result, SourceContext};

impl SourceContext<'_> {
    /// Check that `name` is usable as a Dart package name in `package:` imports.
    pub fn validate_package_name(&self, key: &str, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(self.validation_error(key, format!("{} must not be empty", key)));
        }
        if let Some(reason) = package_name_problem(name) {
            return Err(self.invalid_package_name_error(key, name, reason));
        }
        Ok(())
    }
}

/// Describe why `name` is not a valid Dart package name, if it is not.
pub(crate) fn package_name_problem(name: &str) -> Option<&'static str> {
    let first = name.chars().next()?;
    if first.is_ascii_digit() {
        return Some("package names cannot start with a digit");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Some("package names may only contain lowercase letters, digits, and underscores");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_valid_package_names() {
        assert_eq!(package_name_problem("my_app"), None);
        assert_eq!(package_name_problem("_internal2"), None);
    }

    #[test]
    fn test_invalid_package_names() {
        assert!(package_name_problem("2fast").is_some());
        assert!(package_name_problem("MyApp").is_some());
        assert!(package_name_problem("my-app").is_some());
    }

    #[test]
    fn test_invalid_name_error_is_labelled() {
        let src = "[generator]\nfallback_project_name = \"My-App\"\n";
        let ctx = SourceContext::new(src, "casegen.toml");
        let err = ctx
            .validate_package_name("fallback_project_name", "My-App")
            .unwrap_err();
        match *err {
            Error::InvalidPackageName { name, span, .. } => {
                assert_eq!(name, "My-App");
                assert_eq!(span.map(|s| s.len()), Some(8));
            }
            other => panic!("expected invalid package name error, got {:?}", other),
        }
    }
}
