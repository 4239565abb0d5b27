// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod display;
pub mod footer_links;
pub mod showcase;
pub mod team;
pub mod testimonials;

use serde::{Deserialize, Deserializer};

/// For `Option<Option<T>>` request fields: a missing key leaves the column
/// alone, an explicit `null` clears it.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::nullable;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        excerpt: Option<Option<String>>,
    }

    #[test]
    fn missing_null_and_value_are_distinct() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.excerpt, None);

        let cleared: Patch = serde_json::from_str(r#"{"excerpt":null}"#).unwrap();
        assert_eq!(cleared.excerpt, Some(None));

        let set: Patch = serde_json::from_str(r#"{"excerpt":"hi"}"#).unwrap();
        assert_eq!(set.excerpt, Some(Some("hi".into())));
    }
}
