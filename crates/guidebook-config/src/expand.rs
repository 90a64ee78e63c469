//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key and is reported when a variable is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("guide", "docs.source_dir").unwrap(), "guide");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("GUIDEBOOK_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${GUIDEBOOK_EXPAND_UNSET:-html}", "docs.output_dir").unwrap(),
            "html"
        );
    }

    #[test]
    fn test_variable_expanded_inside_text() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("GUIDEBOOK_EXPAND_EDITION", "2nd");
        }
        assert_eq!(
            expand_env("Guide (${GUIDEBOOK_EXPAND_EDITION} edition)", "site.name").unwrap(),
            "Guide (2nd edition)"
        );
        unsafe {
            std::env::remove_var("GUIDEBOOK_EXPAND_EDITION");
        }
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("GUIDEBOOK_EXPAND_MISSING");
        }
        let err = expand_env("${GUIDEBOOK_EXPAND_MISSING}", "site.name").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("site.name"));
        assert!(message.contains("GUIDEBOOK_EXPAND_MISSING"));
    }
}
