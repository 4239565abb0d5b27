// src/infrastructure/repositories/postgres_testimonials.rs
use super::error::{map_sqlx, to_count};
use crate::domain::content::OrderIndex;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::testimonial::{
    NewTextTestimonial, NewVideoTestimonial, Rating, TextTestimonial, TextTestimonialId,
    TextTestimonialRepository, TextTestimonialUpdate, VideoTestimonial, VideoTestimonialId,
    VideoTestimonialRepository, VideoTestimonialUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const TEXT_COLUMNS: &str = "id, client_name, client_company, client_position, testimonial_text, \
     rating, visible, order_index, created_at, updated_at";
const VIDEO_COLUMNS: &str =
    "id, client_name, client_company, video_url, thumbnail_url, visible, order_index, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTextTestimonialRepository {
    pool: PgPool,
}

impl PostgresTextTestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresVideoTestimonialRepository {
    pool: PgPool,
}

impl PostgresVideoTestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TextRow {
    id: i64,
    client_name: String,
    client_company: Option<String>,
    client_position: Option<String>,
    testimonial_text: String,
    rating: i32,
    visible: bool,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TextRow> for TextTestimonial {
    type Error = DomainError;

    fn try_from(row: TextRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TextTestimonialId::new(row.id)?,
            client_name: row.client_name,
            client_company: row.client_company,
            client_position: row.client_position,
            testimonial_text: row.testimonial_text,
            rating: Rating::new(row.rating)?,
            visible: row.visible,
            order_index: OrderIndex::new(row.order_index),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct VideoRow {
    id: i64,
    client_name: String,
    client_company: Option<String>,
    video_url: String,
    thumbnail_url: Option<String>,
    visible: bool,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VideoRow> for VideoTestimonial {
    type Error = DomainError;

    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VideoTestimonialId::new(row.id)?,
            client_name: row.client_name,
            client_company: row.client_company,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            visible: row.visible,
            order_index: OrderIndex::new(row.order_index),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn list_query(table: &str, columns: &str, include_hidden: bool) -> String {
    let filter = if include_hidden { "" } else { " WHERE visible = TRUE" };
    format!(
        "SELECT {columns} FROM {table}{filter} ORDER BY order_index ASC, created_at ASC, id ASC"
    )
}

#[async_trait]
impl TextTestimonialRepository for PostgresTextTestimonialRepository {
    async fn insert(&self, t: NewTextTestimonial) -> DomainResult<TextTestimonial> {
        let row = sqlx::query_as::<_, TextRow>(&format!(
            "INSERT INTO testimonials_text (client_name, client_company, client_position,
                 testimonial_text, rating, visible, order_index, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {TEXT_COLUMNS}"
        ))
        .bind(t.client_name)
        .bind(t.client_company)
        .bind(t.client_position)
        .bind(t.testimonial_text)
        .bind(i32::from(t.rating))
        .bind(t.visible)
        .bind(i32::from(t.order_index))
        .bind(t.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        TextTestimonial::try_from(row)
    }

    async fn update(&self, update: TextTestimonialUpdate) -> DomainResult<TextTestimonial> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE testimonials_text SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(name) = update.client_name {
            builder.push(", client_name = ");
            builder.push_bind(name);
        }
        if let Some(company) = update.client_company {
            builder.push(", client_company = ");
            builder.push_bind(company);
        }
        if let Some(position) = update.client_position {
            builder.push(", client_position = ");
            builder.push_bind(position);
        }
        if let Some(text) = update.testimonial_text {
            builder.push(", testimonial_text = ");
            builder.push_bind(text);
        }
        if let Some(rating) = update.rating {
            builder.push(", rating = ");
            builder.push_bind(i32::from(rating));
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
        builder.push(TEXT_COLUMNS);

        builder
            .build_query_as::<TextRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("text testimonial"))
            .and_then(TextTestimonial::try_from)
    }

    async fn delete(&self, id: TextTestimonialId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM testimonials_text WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("text testimonial"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TextTestimonialId) -> DomainResult<Option<TextTestimonial>> {
        sqlx::query_as::<_, TextRow>(&format!(
            "SELECT {TEXT_COLUMNS} FROM testimonials_text WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(TextTestimonial::try_from)
        .transpose()
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<TextTestimonial>> {
        sqlx::query_as::<_, TextRow>(&list_query(
            "testimonials_text",
            TEXT_COLUMNS,
            include_hidden,
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(TextTestimonial::try_from)
        .collect()
    }

    async fn count_visible(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM testimonials_text WHERE visible = TRUE")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl VideoTestimonialRepository for PostgresVideoTestimonialRepository {
    async fn insert(&self, t: NewVideoTestimonial) -> DomainResult<VideoTestimonial> {
        let row = sqlx::query_as::<_, VideoRow>(&format!(
            "INSERT INTO testimonials_video (client_name, client_company, video_url,
                 thumbnail_url, visible, order_index, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {VIDEO_COLUMNS}"
        ))
        .bind(t.client_name)
        .bind(t.client_company)
        .bind(t.video_url)
        .bind(t.thumbnail_url)
        .bind(t.visible)
        .bind(i32::from(t.order_index))
        .bind(t.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        VideoTestimonial::try_from(row)
    }

    async fn update(&self, update: VideoTestimonialUpdate) -> DomainResult<VideoTestimonial> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE testimonials_video SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(name) = update.client_name {
            builder.push(", client_name = ");
            builder.push_bind(name);
        }
        if let Some(company) = update.client_company {
            builder.push(", client_company = ");
            builder.push_bind(company);
        }
        if let Some(url) = update.video_url {
            builder.push(", video_url = ");
            builder.push_bind(url);
        }
        if let Some(thumbnail) = update.thumbnail_url {
            builder.push(", thumbnail_url = ");
            builder.push_bind(thumbnail);
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
        builder.push(VIDEO_COLUMNS);

        builder
            .build_query_as::<VideoRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("video testimonial"))
            .and_then(VideoTestimonial::try_from)
    }

    async fn delete(&self, id: VideoTestimonialId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM testimonials_video WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("video testimonial"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: VideoTestimonialId) -> DomainResult<Option<VideoTestimonial>> {
        sqlx::query_as::<_, VideoRow>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM testimonials_video WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(VideoTestimonial::try_from)
        .transpose()
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<VideoTestimonial>> {
        sqlx::query_as::<_, VideoRow>(&list_query(
            "testimonials_video",
            VIDEO_COLUMNS,
            include_hidden,
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(VideoTestimonial::try_from)
        .collect()
    }

    async fn count_visible(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM testimonials_video WHERE visible = TRUE")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }
}
