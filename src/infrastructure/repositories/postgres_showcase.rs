// src/infrastructure/repositories/postgres_showcase.rs
use super::error::map_sqlx;
use crate::domain::content::OrderIndex;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::showcase::{
    NewShowcaseApp, ScrollDirection, ScrollSpeed, ShowcaseApp, ShowcaseAppId,
    ShowcaseAppRepository, ShowcaseAppUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const APP_COLUMNS: &str = "id, app_name, logo_url, app_url, description, category, \
     scroll_direction, scroll_speed, visible, order_index, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresShowcaseAppRepository {
    pool: PgPool,
}

impl PostgresShowcaseAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ShowcaseAppRow {
    id: i64,
    app_name: String,
    logo_url: String,
    app_url: Option<String>,
    description: Option<String>,
    category: Option<String>,
    scroll_direction: String,
    scroll_speed: i32,
    visible: bool,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ShowcaseAppRow> for ShowcaseApp {
    type Error = DomainError;

    fn try_from(row: ShowcaseAppRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ShowcaseAppId::new(row.id)?,
            app_name: row.app_name,
            logo_url: row.logo_url,
            app_url: row.app_url,
            description: row.description,
            category: row.category,
            scroll_direction: row.scroll_direction.parse::<ScrollDirection>()?,
            scroll_speed: ScrollSpeed::new(row.scroll_speed)?,
            visible: row.visible,
            order_index: OrderIndex::new(row.order_index),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ShowcaseAppRepository for PostgresShowcaseAppRepository {
    async fn insert(&self, app: NewShowcaseApp) -> DomainResult<ShowcaseApp> {
        let row = sqlx::query_as::<_, ShowcaseAppRow>(&format!(
            "INSERT INTO showcase_apps (app_name, logo_url, app_url, description, category,
                 scroll_direction, scroll_speed, visible, order_index, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {APP_COLUMNS}"
        ))
        .bind(app.app_name)
        .bind(app.logo_url)
        .bind(app.app_url)
        .bind(app.description)
        .bind(app.category)
        .bind(app.scroll_direction.as_str())
        .bind(app.scroll_speed.value())
        .bind(app.visible)
        .bind(i32::from(app.order_index))
        .bind(app.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ShowcaseApp::try_from(row)
    }

    async fn update(&self, update: ShowcaseAppUpdate) -> DomainResult<ShowcaseApp> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE showcase_apps SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(name) = update.app_name {
            builder.push(", app_name = ");
            builder.push_bind(name);
        }
        if let Some(logo) = update.logo_url {
            builder.push(", logo_url = ");
            builder.push_bind(logo);
        }
        for (column, value) in [
            ("app_url", update.app_url),
            ("description", update.description),
            ("category", update.category),
        ] {
            if let Some(value) = value {
                builder.push(format_args!(", {column} = "));
                builder.push_bind(value);
            }
        }
        if let Some(direction) = update.scroll_direction {
            builder.push(", scroll_direction = ");
            builder.push_bind(direction.as_str());
        }
        if let Some(speed) = update.scroll_speed {
            builder.push(", scroll_speed = ");
            builder.push_bind(speed.value());
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
        builder.push(APP_COLUMNS);

        builder
            .build_query_as::<ShowcaseAppRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("showcase app"))
            .and_then(ShowcaseApp::try_from)
    }

    async fn delete(&self, id: ShowcaseAppId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM showcase_apps WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("showcase app"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ShowcaseAppId) -> DomainResult<Option<ShowcaseApp>> {
        sqlx::query_as::<_, ShowcaseAppRow>(&format!(
            "SELECT {APP_COLUMNS} FROM showcase_apps WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(ShowcaseApp::try_from)
        .transpose()
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<ShowcaseApp>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(APP_COLUMNS);
        builder.push(" FROM showcase_apps");
        if !include_hidden {
            builder.push(" WHERE visible = TRUE");
        }
        builder.push(" ORDER BY order_index ASC, created_at ASC, id ASC");

        builder
            .build_query_as::<ShowcaseAppRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(ShowcaseApp::try_from)
            .collect()
    }
}
