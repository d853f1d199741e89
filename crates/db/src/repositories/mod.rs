//! Movie persistence gateway.
//!
//! The service layer only sees [`MovieRepository`]; [`PgMovieRepo`] backs it
//! with PostgreSQL and [`InMemoryMovieRepo`] with a process-local map.

use async_trait::async_trait;
use chrono::NaiveDate;
use movies_core::types::DbId;

use crate::error::StoreError;
use crate::models::movie::Movie;

pub mod memory;
pub mod movie_repo;

pub use memory::InMemoryMovieRepo;
pub use movie_repo::PgMovieRepo;

/// Storage operations for movies.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, StoreError>;

    /// Exact match on the `(title, release_date)` pair.
    async fn find_by_title_and_release_date(
        &self,
        title: &str,
        release_date: NaiveDate,
    ) -> Result<Option<Movie>, StoreError>;

    /// All movies in storage order. Unbounded.
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Insert when `movie.id` is `None`, otherwise replace the row with that
    /// id. Returns the stored record, which always carries an id.
    ///
    /// Fails with [`StoreError::Duplicate`] if a different movie already has
    /// the same title and release date.
    async fn save(&self, movie: Movie) -> Result<Movie, StoreError>;

    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
