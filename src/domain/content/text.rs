// src/domain/content/text.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Trim a required form field, rejecting blank input.
pub fn required_text(field: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Admin forms submit `""` for untouched optional inputs; store those as NULL.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("title", "  Hi ").unwrap(), "Hi");
        let err = required_text("title", "   ").unwrap_err();
        assert!(err.to_string().contains("title cannot be empty"));
    }

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(Some(String::new())), None);
        assert_eq!(optional_text(Some(" x ".into())), Some("x".into()));
        assert_eq!(optional_text(None), None);
    }
}
