//! Application error type shared by every domain action.

use thiserror::Error;

/// Failure of a domain operation.
///
/// - `Validation`: the caller sent bad input (400)
/// - `NotFound`: the addressed record does not exist (404)
/// - `Upstream`: a remote page could not be fetched (500, message shown)
/// - `Dependency`: storage or another collaborator failed (500)
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}: {cause:#}")]
    Upstream {
        message: String,
        cause: anyhow::Error,
    },

    #[error("dependency failure: {0:#}")]
    Dependency(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        Self::Upstream {
            message: message.into(),
            cause: cause.into(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Trimmed value of a required text field, or `None` when missing or blank.
pub fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(Some(" x ".into())), Some("x".to_string()));
        assert_eq!(required(Some("   ".into())), None);
        assert_eq!(required(None), None);
    }

    #[test]
    fn test_dependency_wraps_anyhow_context() {
        let err: AppError = anyhow::anyhow!("connection reset")
            .context("Failed to insert project")
            .into();
        assert!(err.to_string().contains("Failed to insert project"));
        assert!(err.to_string().contains("connection reset"));
    }
}
