// src/infrastructure/util.rs
use crate::domain::content::SlugGenerator;
use slug::slugify;

/// Lowercases, transliterates non-ASCII via `deunicode` and collapses every
/// run of other characters into a single hyphen.
#[derive(Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::slug::is_slug_form;

    fn derive(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn punctuation_collapses_to_single_hyphens() {
        assert_eq!(derive("Hello, World! 2024"), "hello-world-2024");
        assert_eq!(derive("Jane Q. Doe"), "jane-q-doe");
        assert_eq!(derive("--Already--dashed--"), "already-dashed");
    }

    #[test]
    fn non_ascii_is_transliterated() {
        assert_eq!(derive("  Café São Paulo  "), "cafe-sao-paulo");
    }

    #[test]
    fn output_is_slug_form_or_empty() {
        for input in [
            "Launch Week 🚀",
            "  spaced   out  ",
            "UPPER_case_Words",
            "a/b\\c",
            "100% legit!!",
            "!!!",
            "",
        ] {
            let slug = derive(input);
            assert!(slug.is_empty() || is_slug_form(&slug), "{input:?} -> {slug:?}");
            assert_eq!(slug, slug.to_lowercase());
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }

    #[test]
    fn idempotent_on_slug_form() {
        for slug in ["hello-world-2024", "jane-q-doe", "a", "x1-y2"] {
            assert_eq!(derive(slug), slug);
            assert_eq!(derive(&derive(slug)), derive(slug));
        }
    }
}
