// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the admin session from the authority block's facts.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(&fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    session_id: Option<String>,
    capabilities: HashSet<Capability>,
}

impl ClaimsContext {
    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("issued_at", [Term::Date(secs)]) => self.issued_at = Some(from_unix(*secs)),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = Some(from_unix(*secs)),
            ("session", [Term::Str(sid)]) => self.session_id = Some(sid.clone()),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let role = self
            .role
            .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;

        let mut capabilities = role.default_capabilities();
        capabilities.extend(self.capabilities);

        Ok(AuthenticatedUser {
            id: UserId::new(user_id)?,
            username: self
                .username
                .ok_or_else(|| ApplicationError::unauthorized("missing username"))?,
            role,
            capabilities,
            issued_at: self
                .issued_at
                .map(DateTime::<Utc>::from)
                .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?,
            expires_at: self
                .expires_at
                .map(DateTime::<Utc>::from)
                .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?,
            session_id: self
                .session_id
                .ok_or_else(|| ApplicationError::unauthorized("missing session"))?,
        })
    }
}

fn from_unix(seconds: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(name: &str, terms: Vec<Term>) -> Fact {
        Fact::new(name.to_string(), terms)
    }

    #[test]
    fn rebuilds_session_from_facts() {
        let facts = vec![
            fact("user", vec![Term::Integer(7), Term::Str("editor1".into())]),
            fact("role", vec![Term::Str("editor".into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
            fact("session", vec![Term::Str("sid-1".into())]),
        ];
        let user = parse_claims(facts).unwrap();
        assert_eq!(i64::from(user.id), 7);
        assert_eq!(user.role, Role::Editor);
        assert_eq!(user.session_id, "sid-1");
        assert!(user.has_capability("blog", "create"));
        assert!(!user.has_capability("blog", "publish"));
    }

    #[test]
    fn missing_session_is_unauthorized() {
        let facts = vec![
            fact("user", vec![Term::Integer(7), Term::Str("editor1".into())]),
            fact("role", vec![Term::Str("editor".into())]),
            fact("issued_at", vec![Term::Date(1_700_000_000)]),
            fact("expires_at", vec![Term::Date(1_700_003_600)]),
        ];
        assert!(matches!(
            parse_claims(facts),
            Err(ApplicationError::Unauthorized(_))
        ));
    }
}
