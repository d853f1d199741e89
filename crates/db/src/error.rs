/// Failure modes of a [`MovieRepository`](crate::repositories::MovieRepository).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another movie already has the same title and release date.
    #[error("A movie with the same title and release date already exists")]
    Duplicate,

    /// A save completed but the stored record came back without an id.
    #[error("Saved movie has no id")]
    MissingId,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Name of the unique constraint over `(title, release_date)`.
pub const UQ_TITLE_RELEASE_DATE: &str = "uq_movies_title_release_date";

/// Map a sqlx error, turning a title/release-date unique violation into
/// [`StoreError::Duplicate`].
pub(crate) fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some(UQ_TITLE_RELEASE_DATE)
        {
            return StoreError::Duplicate;
        }
    }
    StoreError::Database(err)
}
