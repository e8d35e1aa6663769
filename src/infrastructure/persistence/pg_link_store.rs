//! PostgreSQL implementation of the link store.

use async_stream::try_stream;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use futures::stream::BoxStream;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Row shape shared by all link queries.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    short_id: String,
    title: Option<String>,
    target_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.short_id, row.title, row.target_url, row.created_at)
    }
}

/// PostgreSQL store for short links.
///
/// The `links` primary key on `short_id` is the uniqueness mechanism:
/// concurrent inserts of the same identifier race inside the database and
/// exactly one wins, with no application-level locking.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert_unique(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_id, title, target_url)
            VALUES ($1, $2, $3)
            RETURNING short_id, title, target_url, created_at
            "#,
        )
        .bind(&new_link.short_id)
        .bind(&new_link.title)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn get_by_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT short_id, title, target_url, created_at
            FROM links
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    fn list_all(&self) -> BoxStream<'static, Result<Link, AppError>> {
        let pool = Arc::clone(&self.pool);

        Box::pin(try_stream! {
            let mut rows = sqlx::query_as::<_, LinkRow>(
                "SELECT short_id, title, target_url, created_at FROM links",
            )
            .fetch(pool.as_ref());

            while let Some(row) = rows.try_next().await.map_err(AppError::from)? {
                yield row.into();
            }
        })
    }
}
