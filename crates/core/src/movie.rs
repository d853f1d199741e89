//! Movie request rules.
//!
//! Pure checks applied to incoming movie payloads before anything is
//! written, plus the messages echoed back to clients when a write is refused.

use indexmap::IndexSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors.
pub const MOVIE_ENTITY: &str = "Movie";

/// Echoed in `errorMessage` when title or stars are missing.
pub const MANDATORY_PARAMS_NOT_SET: &str = "mandatory parameters not set";

/// Echoed in `errorMessage` when a movie with the same title and release
/// date is already stored.
pub const ENTITY_ALREADY_EXISTS: &str = "Movie already exists";

/// Echoed in `errorMessage` when the title or a star contains a NUL
/// character, which PostgreSQL text columns cannot store.
pub const TEXT_CONTAINS_NUL: &str = "title and stars must not contain NUL characters";

/// Validate the mandatory parts of a movie write request.
///
/// The title must be non-empty and the star set must be present and
/// non-empty. The title is not trimmed: `" "` is accepted. No text may
/// contain `\0`, so every store accepts the same payloads.
pub fn validate_request(title: &str, stars: Option<&IndexSet<String>>) -> Result<(), CoreError> {
    let stars_missing = stars.map_or(true, IndexSet::is_empty);
    if title.is_empty() || stars_missing {
        return Err(CoreError::Validation(MANDATORY_PARAMS_NOT_SET.to_string()));
    }

    let has_nul =
        title.contains('\0') || stars.into_iter().flatten().any(|s| s.contains('\0'));
    if has_nul {
        return Err(CoreError::Validation(TEXT_CONTAINS_NUL.to_string()));
    }
    Ok(())
}

/// Boolean form of [`validate_request`].
pub fn is_valid_request(title: &str, stars: Option<&IndexSet<String>>) -> bool {
    validate_request(title, stars).is_ok()
}

/// Error returned when no movie exists under `id`.
pub fn movie_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: MOVIE_ENTITY,
        id,
    }
}

/// Error returned when the title and release date pair is already taken.
pub fn movie_already_exists() -> CoreError {
    CoreError::Conflict(ENTITY_ALREADY_EXISTS.to_string())
}

/// Location reference for a newly created movie.
///
/// Note this is rooted at `/movies`, not at the versioned API prefix.
pub fn movie_location(id: DbId) -> String {
    format!("/movies/{id}")
}
