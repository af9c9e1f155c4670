use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// A variable that is set but blank (only whitespace) counts as missing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnvVarError(name.to_string())),
    }
}

/// Reads an optional environment variable, treating blank values as unset.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    get_env_var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        let err = get_env_var("SHARED_UTILS_SURELY_NOT_SET_9F2C").unwrap_err();
        assert_eq!(err, MissingEnvVarError("SHARED_UTILS_SURELY_NOT_SET_9F2C".into()));
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHARED_UTILS_SURELY_NOT_SET_9F2C"
        );
    }

    #[test]
    fn optional_lookup_returns_none_when_unset() {
        assert!(get_optional_env_var("SHARED_UTILS_SURELY_NOT_SET_7A1B").is_none());
    }

    #[test]
    fn present_variable_is_returned() {
        // PATH is set in every environment cargo test runs in.
        assert!(get_env_var("PATH").is_ok());
    }
}
