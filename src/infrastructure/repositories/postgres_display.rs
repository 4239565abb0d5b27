// src/infrastructure/repositories/postgres_display.rs
use super::error::map_sqlx;
use crate::domain::content::{Collection, DisplaySettings, DisplaySettingsRepository, OrderIndex};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Writes `visible` / `order_index` on any ordered collection. Table names
/// come from [`Collection::table`], never from request input.
#[derive(Clone)]
pub struct PostgresDisplaySettingsRepository {
    pool: PgPool,
}

impl PostgresDisplaySettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn set_column<T>(
        &self,
        collection: Collection,
        column: &str,
        id: i64,
        value: T,
    ) -> DomainResult<DisplaySettings>
    where
        T: for<'q> sqlx::Encode<'q, sqlx::Postgres> + sqlx::Type<sqlx::Postgres> + Send,
    {
        let sql = format!(
            "UPDATE {table} SET {column} = $1 WHERE id = $2 RETURNING id, visible, order_index",
            table = collection.table()
        );
        let row = sqlx::query_as::<_, DisplayRow>(&sql)
            .bind(value)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found(collection.label()))?;

        tracing::debug!(%collection, id, column, "display setting written");
        Ok(DisplaySettings {
            collection,
            id: row.id,
            visible: row.visible,
            order_index: OrderIndex::new(row.order_index),
        })
    }
}

#[derive(Debug, FromRow)]
struct DisplayRow {
    id: i64,
    visible: bool,
    order_index: i32,
}

#[async_trait]
impl DisplaySettingsRepository for PostgresDisplaySettingsRepository {
    async fn set_visibility(
        &self,
        collection: Collection,
        id: i64,
        visible: bool,
    ) -> DomainResult<DisplaySettings> {
        self.set_column(collection, "visible", id, visible).await
    }

    async fn set_order_index(
        &self,
        collection: Collection,
        id: i64,
        order_index: OrderIndex,
    ) -> DomainResult<DisplaySettings> {
        self.set_column(collection, "order_index", id, i32::from(order_index))
            .await
    }
}
