//! Orchestration for the movie resource.
//!
//! Every operation performs at most one read followed by one conditional
//! write against the [`MovieRepository`]. Refusals come back as
//! [`MovieError::Rejected`], carrying the reason and, for refused writes, the
//! echoed payload with its `errorMessage` filled in.

use std::sync::Arc;

use movies_core::error::CoreError;
use movies_core::movie::{movie_already_exists, movie_location, movie_not_found};
use movies_core::types::DbId;
use movies_db::error::StoreError;
use movies_db::models::movie::{Movie, MovieDto};
use movies_db::repositories::MovieRepository;

/// Outcome of a refused or failed movie operation.
#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    /// The request was refused. `movie` is echoed back to the client when
    /// present; not-found refusals carry no body.
    #[error("{reason}")]
    Rejected {
        reason: CoreError,
        movie: Option<MovieDto>,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MovieError {
    fn not_found(id: DbId) -> Self {
        MovieError::Rejected {
            reason: movie_not_found(id),
            movie: None,
        }
    }

    fn echo(reason: CoreError, movie: MovieDto) -> Self {
        let movie = movie.rejected(&reason);
        MovieError::Rejected {
            reason,
            movie: Some(movie),
        }
    }
}

/// A successfully created movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMovie {
    pub id: DbId,
    /// Value for the `Location` response header.
    pub location: String,
}

/// Movie operations over any [`MovieRepository`].
#[derive(Clone)]
pub struct MovieService {
    repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: DbId) -> Result<MovieDto, MovieError> {
        let movie = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| MovieError::not_found(id))?;
        Ok(movie.into())
    }

    /// Every stored movie, in storage order. Unbounded.
    pub async fn list(&self) -> Result<Vec<MovieDto>, MovieError> {
        let movies = self.repo.find_all().await?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    /// Validate, reject duplicates by title and release date, then insert.
    ///
    /// Any `id` in the payload is ignored; the repository assigns one.
    pub async fn add(&self, input: MovieDto) -> Result<CreatedMovie, MovieError> {
        if let Err(reason) = input.validate() {
            return Err(MovieError::echo(reason, input));
        }

        let existing = self
            .repo
            .find_by_title_and_release_date(&input.title, input.release_date)
            .await?;
        if existing.is_some() {
            return Err(MovieError::echo(movie_already_exists(), input));
        }

        let record = Movie {
            id: None,
            ..Movie::from(input.clone())
        };
        let saved = match self.repo.save(record).await {
            Ok(saved) => saved,
            // Lost a race with a concurrent insert of the same movie.
            Err(StoreError::Duplicate) => {
                return Err(MovieError::echo(movie_already_exists(), input))
            }
            Err(err) => return Err(err.into()),
        };

        let id = saved.id.ok_or(StoreError::MissingId)?;
        tracing::info!(movie_id = id, title = %saved.title, "Saved movie");

        Ok(CreatedMovie {
            id,
            location: movie_location(id),
        })
    }

    /// Replace the movie stored under `id` with `input` in full.
    ///
    /// The path `id` is the key that gets written; an `id` in the payload is
    /// ignored.
    pub async fn update(&self, id: DbId, input: MovieDto) -> Result<(), MovieError> {
        if let Err(reason) = input.validate() {
            return Err(MovieError::echo(reason, input));
        }

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(MovieError::not_found(id));
        }

        let record = Movie {
            id: Some(id),
            ..Movie::from(input.clone())
        };
        match self.repo.save(record).await {
            Ok(saved) => {
                tracing::info!(movie_id = id, title = %saved.title, "Updated movie");
                Ok(())
            }
            Err(StoreError::Duplicate) => Err(MovieError::echo(movie_already_exists(), input)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, id: DbId) -> Result<(), MovieError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(MovieError::not_found(id));
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!(movie_id = id, "Deleted movie");
        Ok(())
    }

    /// Whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.repo.health_check().await.is_ok()
    }
}
