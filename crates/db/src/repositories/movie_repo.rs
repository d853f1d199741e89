//! Repository for the `movies` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use movies_core::types::DbId;
use sqlx::PgPool;

use crate::error::{classify, StoreError};
use crate::models::movie::{Movie, MovieRow};
use crate::repositories::MovieRepository;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_date, stars";

/// PostgreSQL-backed [`MovieRepository`].
#[derive(Clone)]
pub struct PgMovieRepo {
    pool: PgPool,
}

impl PgMovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, movie: &Movie) -> Result<Movie, StoreError> {
        let query = format!(
            "INSERT INTO movies (title, release_date, stars)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let stars: Vec<String> = movie.stars.iter().cloned().collect();
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&movie.title)
            .bind(movie.release_date)
            .bind(&stars)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)?;
        Ok(row.into())
    }

    async fn upsert(&self, id: DbId, movie: &Movie) -> Result<Movie, StoreError> {
        let query = format!(
            "INSERT INTO movies (id, title, release_date, stars)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                release_date = EXCLUDED.release_date,
                stars = EXCLUDED.stars
             RETURNING {COLUMNS}"
        );
        let stars: Vec<String> = movie.stars.iter().cloned().collect();
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(&movie.title)
            .bind(movie.release_date)
            .bind(&stars)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)?;
        Ok(row.into())
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    async fn find_by_title_and_release_date(
        &self,
        title: &str,
        release_date: NaiveDate,
    ) -> Result<Option<Movie>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM movies WHERE title = $1 AND release_date = $2");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(title)
            .bind(release_date)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn save(&self, movie: Movie) -> Result<Movie, StoreError> {
        match movie.id {
            None => self.insert(&movie).await,
            Some(id) => self.upsert(id, &movie).await,
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
