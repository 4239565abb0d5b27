// src/infrastructure/repositories/postgres_footer.rs
use super::error::map_sqlx;
use crate::domain::content::OrderIndex;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::footer::{
    FooterCategory, FooterLink, FooterLinkId, FooterLinkRepository, FooterLinkUpdate,
    NewFooterLink, SocialPlatform,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LINK_COLUMNS: &str =
    "id, title, url, category, icon_name, visible, order_index, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFooterLinkRepository {
    pool: PgPool,
}

impl PostgresFooterLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FooterLinkRow {
    id: i64,
    title: String,
    url: String,
    category: String,
    icon_name: Option<String>,
    visible: bool,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FooterLinkRow> for FooterLink {
    type Error = DomainError;

    fn try_from(row: FooterLinkRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: FooterLinkId::new(row.id)?,
            title: row.title,
            url: row.url,
            category: row.category.parse::<FooterCategory>()?,
            icon_name: row
                .icon_name
                .as_deref()
                .map(str::parse::<SocialPlatform>)
                .transpose()?,
            visible: row.visible,
            order_index: OrderIndex::new(row.order_index),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl FooterLinkRepository for PostgresFooterLinkRepository {
    async fn insert(&self, link: NewFooterLink) -> DomainResult<FooterLink> {
        let row = sqlx::query_as::<_, FooterLinkRow>(&format!(
            "INSERT INTO footer_links (title, url, category, icon_name, visible, order_index,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(link.title)
        .bind(link.url)
        .bind(link.category.as_str())
        .bind(link.icon_name.map(SocialPlatform::as_str))
        .bind(link.visible)
        .bind(i32::from(link.order_index))
        .bind(link.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        FooterLink::try_from(row)
    }

    async fn update(&self, update: FooterLinkUpdate) -> DomainResult<FooterLink> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE footer_links SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(url) = update.url {
            builder.push(", url = ");
            builder.push_bind(url);
        }
        if let Some(category) = update.category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(icon) = update.icon_name {
            builder.push(", icon_name = ");
            builder.push_bind(icon.map(SocialPlatform::as_str));
        }
        if let Some(visible) = update.visible {
            builder.push(", visible = ");
            builder.push_bind(visible);
        }
        if let Some(order_index) = update.order_index {
            builder.push(", order_index = ");
            builder.push_bind(i32::from(order_index));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(LINK_COLUMNS);

        builder
            .build_query_as::<FooterLinkRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("footer link"))
            .and_then(FooterLink::try_from)
    }

    async fn delete(&self, id: FooterLinkId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM footer_links WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("footer link"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: FooterLinkId) -> DomainResult<Option<FooterLink>> {
        sqlx::query_as::<_, FooterLinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM footer_links WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(FooterLink::try_from)
        .transpose()
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<FooterLink>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(LINK_COLUMNS);
        builder.push(" FROM footer_links");
        if !include_hidden {
            builder.push(" WHERE visible = TRUE");
        }
        builder.push(" ORDER BY order_index ASC, created_at ASC, id ASC");

        builder
            .build_query_as::<FooterLinkRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(FooterLink::try_from)
            .collect()
    }
}
