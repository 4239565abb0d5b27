// src/domain/content/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Turns a display string into slug form. The production implementation
/// transliterates non-ASCII characters before collapsing separators.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Whether the record being written already exists. Only new records get an
/// automatically derived slug; existing records keep their public URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugOrigin {
    New,
    Existing,
}

/// URL-safe identifier: lowercase ASCII letters and digits in groups joined
/// by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_slug_form(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain lowercase letters, digits and single hyphens between them"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// `^[a-z0-9]+(-[a-z0-9]+)*$` without pulling in a regex engine.
pub fn is_slug_form(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}
