// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_BLOG_SLUG: &str = "blog_posts_slug_key";
const CNT_TEAM_SLUG: &str = "team_members_slug_key";
const CNT_BLOG_AUTHOR: &str = "blog_posts_author_id_fkey";
const CNT_USER_USERNAME: &str = "admin_users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BLOG_SLUG | CNT_TEAM_SLUG => DomainError::slug_taken(),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_BLOG_AUTHOR => DomainError::Validation("author is not a team member".into()),
                    other if db_err.code().as_deref() == Some("23514") => {
                        DomainError::Validation(format!("check constraint violated: {other}"))
                    }
                    other => {
                        tracing::error!(constraint = other, error = %db_err, "unmapped constraint violation");
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            tracing::error!(error = %db_err, "database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => {
            tracing::error!(error = %err, "database error");
            DomainError::Persistence(err.to_string())
        }
    }
}

/// Count columns come back as `BIGINT`; negative values cannot happen.
pub fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}
