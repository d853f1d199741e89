use crate::services::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the repository sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Movie orchestration over the configured repository.
    pub movies: MovieService,
}
