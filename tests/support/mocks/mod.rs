// tests/support/mocks/mod.rs
pub mod content;
pub mod security;

pub use content::InMemoryContent;
pub use security::*;
