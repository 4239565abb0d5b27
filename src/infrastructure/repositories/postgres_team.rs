// src/infrastructure/repositories/postgres_team.rs
use super::error::{map_sqlx, to_count};
use crate::domain::content::{OrderIndex, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::{
    NewTeamMember, SocialLinks, TeamMember, TeamMemberFilter, TeamMemberId, TeamMemberRepository,
    TeamMemberUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const MEMBER_COLUMNS: &str = "id, full_name, slug, job_title, department, short_bio, bio, \
     location, email, phone, photo_url, is_featured, social_links, visible, order_index, \
     created_at, updated_at";

const DISPLAY_ORDER: &str = " ORDER BY order_index ASC, created_at ASC, id ASC";

#[derive(Clone)]
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeamMemberRow {
    id: i64,
    full_name: String,
    slug: String,
    job_title: Option<String>,
    department: Option<String>,
    short_bio: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    photo_url: Option<String>,
    is_featured: bool,
    social_links: Json<SocialLinks>,
    visible: bool,
    order_index: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TeamMemberRow> for TeamMember {
    type Error = DomainError;

    fn try_from(row: TeamMemberRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TeamMemberId::new(row.id)?,
            full_name: row.full_name,
            slug: Slug::new(row.slug)?,
            job_title: row.job_title,
            department: row.department,
            short_bio: row.short_bio,
            bio: row.bio,
            location: row.location,
            email: row.email,
            phone: row.phone,
            photo_url: row.photo_url,
            is_featured: row.is_featured,
            social_links: row.social_links.0,
            visible: row.visible,
            order_index: OrderIndex::new(row.order_index),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn rows_to_members(rows: Vec<TeamMemberRow>) -> DomainResult<Vec<TeamMember>> {
    rows.into_iter().map(TeamMember::try_from).collect()
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn insert(&self, member: NewTeamMember) -> DomainResult<TeamMember> {
        let row = sqlx::query_as::<_, TeamMemberRow>(&format!(
            "INSERT INTO team_members (full_name, slug, job_title, department, short_bio, bio,
                 location, email, phone, photo_url, is_featured, social_links, visible,
                 order_index, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
             RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(member.full_name)
        .bind(member.slug.into_inner())
        .bind(member.job_title)
        .bind(member.department)
        .bind(member.short_bio)
        .bind(member.bio)
        .bind(member.location)
        .bind(member.email)
        .bind(member.phone)
        .bind(member.photo_url)
        .bind(member.is_featured)
        .bind(Json(member.social_links))
        .bind(member.visible)
        .bind(i32::from(member.order_index))
        .bind(member.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        TeamMember::try_from(row)
    }

    async fn update(&self, update: TeamMemberUpdate) -> DomainResult<TeamMember> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE team_members SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(name) = update.full_name {
            builder.push(", full_name = ");
            builder.push_bind(name);
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        for (column, value) in [
            ("job_title", update.job_title),
            ("department", update.department),
            ("short_bio", update.short_bio),
            ("bio", update.bio),
            ("location", update.location),
            ("email", update.email),
            ("phone", update.phone),
            ("photo_url", update.photo_url),
        ] {
            if let Some(value) = value {
                builder.push(format_args!(", {column} = "));
                builder.push_bind(value);
            }
        }
        if let Some(featured) = update.is_featured {
            builder.push(", is_featured = ");
            builder.push_bind(featured);
        }
        if let Some(links) = update.social_links {
            builder.push(", social_links = ");
            builder.push_bind(Json(links));
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
        builder.push(MEMBER_COLUMNS);

        builder
            .build_query_as::<TeamMemberRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("team member"))
            .and_then(TeamMember::try_from)
    }

    async fn delete(&self, id: TeamMemberId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("team member"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TeamMemberId) -> DomainResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMemberRow>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(TeamMember::try_from)
        .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMemberRow>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(TeamMember::try_from)
        .transpose()
    }

    async fn find_by_ids(&self, ids: &[TeamMemberId]) -> DomainResult<Vec<TeamMember>> {
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TeamMemberRow>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows_to_members(rows)
    }

    async fn list(&self, filter: &TeamMemberFilter) -> DomainResult<Vec<TeamMember>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(MEMBER_COLUMNS);
        builder.push(" FROM team_members WHERE TRUE");
        if !filter.include_hidden {
            builder.push(" AND visible = TRUE");
        }
        if filter.featured_only {
            builder.push(" AND is_featured = TRUE");
        }
        if let Some(department) = filter.department.as_deref() {
            builder.push(" AND department = ");
            builder.push_bind(department);
        }
        builder.push(DISPLAY_ORDER);

        let rows = builder
            .build_query_as::<TeamMemberRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows_to_members(rows)
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM team_members")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)
    }
}
