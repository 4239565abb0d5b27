// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with PHC-encoded output. Hashing runs on the blocking pool.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub const fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

async fn off_runtime<T, F>(work: F) -> ApplicationResult<T>
where
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("password task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        let argon2 = self.argon2();
        off_runtime(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
    }

    /// Stored hashes carry their own parameters, so accounts hashed under
    /// older settings still verify.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        let argon2 = self.argon2();
        off_runtime(move || {
            let parsed = PasswordHash::new(&expected_hash).map_err(|err| {
                tracing::error!(error = %err, "stored password hash is not a PHC string");
                ApplicationError::unauthorized("invalid credentials")
            })?;
            argon2
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Argon2PasswordHasher {
        Argon2PasswordHasher::with_params(Params::new(1024, 1, 1, None).unwrap())
    }

    #[tokio::test]
    async fn hash_verifies_only_the_same_password() {
        let hasher = fast();
        let hash = hasher.hash("Sup3r-Secret-Pass").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
        hasher.verify("Sup3r-Secret-Pass", &hash).await.unwrap();

        let err = hasher.verify("sup3r-secret-pass", &hash).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn malformed_stored_hash_reads_as_bad_credentials() {
        let err = fast().verify("anything", "not-a-hash").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
