// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    fmt::Write as _,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Ed25519-signed biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn authority_block(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("sid".to_string(), subject.session_id.clone().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r"
        user({uid}, {uname});
        role({urole});
        session({sid});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        ",
    );

    for cap in &subject.capabilities {
        let _ = writeln!(
            code,
            r#"right("{}", "{}");"#,
            escape(&cap.resource),
            escape(&cap.action)
        );
    }

    (code, params)
}

fn mint(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = authority_block(&subject, issued_at, expires_at);
        let token = mint(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    fn manager(ttl: Duration) -> BiscuitTokenManager {
        let hex = KeyPair::new().private().to_bytes_hex();
        BiscuitTokenManager::new(&hex, ttl).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(3).unwrap(),
            username: "admin".into(),
            role: Role::Admin,
            capabilities: Role::Admin.default_capabilities(),
            session_id: "session-abc".into(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let manager = manager(Duration::from_secs(3600));
        let issued = manager.issue(subject()).await.unwrap();
        assert_eq!(issued.session_id, "session-abc");
        assert_eq!(issued.expires_in, 3600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.session_id, "session-abc");
        assert!(user.has_capability("blog", "publish"));
    }

    #[tokio::test]
    async fn foreign_token_is_rejected() {
        let issued = manager(Duration::from_secs(60))
            .issue(subject())
            .await
            .unwrap();
        let err = manager(Duration::from_secs(60))
            .authenticate(&issued.token)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let err = manager(Duration::from_secs(60))
            .authenticate("not-a-token")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
