#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `entity` is the human-readable name, e.g. `"Blog post"`.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}
