//! Process-local [`MovieRepository`], used when no database is configured
//! and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use movies_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::movie::Movie;
use crate::repositories::MovieRepository;

#[derive(Debug)]
struct Inner {
    movies: BTreeMap<DbId, Movie>,
    next_id: DbId,
}

/// Movies held in a `BTreeMap` keyed by id. Ids start at 1 and are never
/// reused. Enforces the same title/release-date uniqueness as the table.
#[derive(Debug)]
pub struct InMemoryMovieRepo {
    inner: RwLock<Inner>,
}

impl Default for InMemoryMovieRepo {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                movies: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        Ok(self.inner.read().await.movies.get(&id).cloned())
    }

    async fn find_by_title_and_release_date(
        &self,
        title: &str,
        release_date: NaiveDate,
    ) -> Result<Option<Movie>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .movies
            .values()
            .find(|m| m.title == title && m.release_date == release_date)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.inner.read().await.movies.values().cloned().collect())
    }

    async fn save(&self, mut movie: Movie) -> Result<Movie, StoreError> {
        let mut inner = self.inner.write().await;

        let taken = inner.movies.values().any(|m| {
            m.id != movie.id && m.title == movie.title && m.release_date == movie.release_date
        });
        if taken {
            return Err(StoreError::Duplicate);
        }

        let id = match movie.id {
            Some(id) => id,
            None => inner.next_id,
        };
        inner.next_id = inner.next_id.max(id + 1);
        movie.id = Some(id);
        inner.movies.insert(id, movie.clone());
        Ok(movie)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.movies.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
