// src/domain/content/services.rs
use std::sync::Arc;

use crate::domain::content::slug::{Slug, SlugGenerator, SlugOrigin};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service deciding which slug, if any, a write should persist.
///
/// Uniqueness is left to the collection's unique constraint; a collision comes
/// back from the repository as [`DomainError::Conflict`].
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Derive a slug from a title or name. Input with no letters or digits
    /// (after transliteration) is rejected rather than stored as `""`.
    pub fn derive(&self, source: &str) -> DomainResult<Slug> {
        let candidate = self.generator.slugify(source);
        if candidate.is_empty() {
            return Err(DomainError::Validation(format!(
                "'{source}' has no letters or digits to build a slug from; supply a slug explicitly"
            )));
        }
        Slug::new(candidate)
    }

    /// Returns `Some(slug)` when the write must set the slug column.
    ///
    /// A non-blank explicit slug always wins and is validated as-is. Without
    /// one, new records derive from `display` and existing records keep
    /// whatever slug they already have.
    pub fn resolve(
        &self,
        display: &str,
        explicit: Option<&str>,
        origin: SlugOrigin,
    ) -> DomainResult<Option<Slug>> {
        match origin {
            SlugOrigin::New => self.for_new(display, explicit).map(Some),
            SlugOrigin::Existing => non_blank(explicit).map(Slug::new).transpose(),
        }
    }

    /// Slug for a record being created; always yields one or an error.
    pub fn for_new(&self, display: &str, explicit: Option<&str>) -> DomainResult<Slug> {
        match non_blank(explicit) {
            Some(value) => Slug::new(value),
            None => self.derive(display),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AsciiSlugger;

    impl SlugGenerator for AsciiSlugger {
        fn slugify(&self, input: &str) -> String {
            input
                .to_lowercase()
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    fn service() -> SlugService {
        SlugService::new(Arc::new(AsciiSlugger))
    }

    #[test]
    fn new_record_derives_from_name() {
        let slug = service()
            .resolve("Jane Q. Doe", None, SlugOrigin::New)
            .unwrap();
        assert_eq!(slug.unwrap().as_str(), "jane-q-doe");
    }

    #[test]
    fn existing_record_keeps_slug_when_renamed() {
        let slug = service()
            .resolve("Jane Q. Smith", None, SlugOrigin::Existing)
            .unwrap();
        assert!(slug.is_none());
    }

    #[test]
    fn blank_explicit_slug_counts_as_absent() {
        let slug = service()
            .resolve("Hello There", Some("   "), SlugOrigin::New)
            .unwrap();
        assert_eq!(slug.unwrap().as_str(), "hello-there");
    }

    #[test]
    fn explicit_slug_overrides_and_is_validated() {
        let svc = service();
        let slug = svc
            .resolve("Jane Q. Smith", Some("jane-smith"), SlugOrigin::Existing)
            .unwrap();
        assert_eq!(slug.unwrap().as_str(), "jane-smith");

        let err = svc
            .resolve("Jane", Some("Jane Smith"), SlugOrigin::New)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn punctuation_only_title_is_rejected() {
        let err = service().derive("!!! ???").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
