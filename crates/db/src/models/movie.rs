//! Movie record, its wire representation, and the mapping between them.

use chrono::NaiveDate;
use indexmap::IndexSet;
use movies_core::error::CoreError;
use movies_core::movie::{is_valid_request, validate_request};
use movies_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie as stored in the `movies` table.
///
/// `id` is `None` until the record has been saved once. `stars` is a set:
/// duplicate names collapse, and equality ignores order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: Option<DbId>,
    pub title: String,
    pub release_date: NaiveDate,
    pub stars: IndexSet<String>,
}

/// Raw row shape; Postgres hands back `TEXT[]` as a `Vec`.
#[derive(Debug, FromRow)]
pub(crate) struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub release_date: NaiveDate,
    pub stars: Vec<String>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: Some(row.id),
            title: row.title,
            release_date: row.release_date,
            stars: row.stars.into_iter().collect(),
        }
    }
}

/// Request/response payload for the `/v1/movies` resource.
///
/// Missing `title` deserializes to `""` and missing `stars` to `None` so
/// both surface as validation failures rather than extractor errors.
/// `error_message` is only populated on rejected writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub title: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub stars: Option<IndexSet<String>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl MovieDto {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_request(&self.title, self.stars.as_ref())
    }

    pub fn is_valid_request(&self) -> bool {
        is_valid_request(&self.title, self.stars.as_ref())
    }

    /// Echo this payload back with `errorMessage` set to the rejection reason.
    pub fn rejected(self, reason: &CoreError) -> Self {
        MovieDto {
            error_message: Some(reason.reason()),
            ..self
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        MovieDto {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            stars: Some(movie.stars),
            error_message: None,
        }
    }
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Movie {
            id: dto.id,
            title: dto.title,
            release_date: dto.release_date,
            stars: dto.stars.unwrap_or_default(),
        }
    }
}
