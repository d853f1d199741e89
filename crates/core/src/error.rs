use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// The bare human-readable reason, without the variant prefix.
    ///
    /// This is what gets echoed back to clients in `errorMessage`.
    pub fn reason(&self) -> String {
        match self {
            CoreError::NotFound { entity, id } => format!("{entity} with id {id} not found"),
            CoreError::Validation(msg) | CoreError::Conflict(msg) => msg.clone(),
        }
    }
}
