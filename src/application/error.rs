// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by use cases. Slug clashes and storage errors arrive
/// through `Domain`; everything else is raised here.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("not signed in: {0}")]
    Unauthorized(String),

    #[error("not permitted: {0}")]
    Forbidden(String),

    #[error("backend failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `missing("blog post")` reads as "blog post not found".
    pub fn missing(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True for failures the caller cannot fix by changing the request.
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Infrastructure(_) | Self::Domain(DomainError::Persistence(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_the_record() {
        let err = ApplicationError::missing("showcase app");
        assert_eq!(err.to_string(), "showcase app not found");
        assert!(!err.is_internal());
    }

    #[test]
    fn storage_failures_are_internal() {
        assert!(ApplicationError::infrastructure("pool closed").is_internal());
        assert!(ApplicationError::from(DomainError::Persistence("io".into())).is_internal());
        assert!(!ApplicationError::from(DomainError::Conflict("slug".into())).is_internal());
    }
}
