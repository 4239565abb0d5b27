// src/application/queries/mod.rs
pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod footer_links;
pub mod showcase;
pub mod team;
pub mod testimonials;

use crate::application::dto::AuthenticatedUser;

/// Hidden rows are only listed for signed-in users allowed to manage them.
pub(crate) fn sees_hidden(actor: Option<&AuthenticatedUser>, resource: &str) -> bool {
    actor.is_some_and(|a| a.has_capability(resource, "view:hidden"))
}
