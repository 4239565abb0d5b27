// src/domain/content/ids.rs

/// Declares a positive database identifier newtype for one collection.
macro_rules! record_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> $crate::domain::errors::DomainResult<Self> {
                if id <= 0 {
                    Err($crate::domain::errors::DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use record_id;
