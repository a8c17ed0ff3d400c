/// Errors raised while converting a single Kognic record.
///
/// Both kinds abort the whole conversion; nothing partial is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The record is missing a required field or a field has the wrong shape
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unsupported geometry '{kind}' for object {id}")]
    UnsupportedGeometry { id: String, kind: String },
}

impl ConvertError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::Validation(_) => "VALIDATION_ERROR",
            ConvertError::UnsupportedGeometry { .. } => "UNSUPPORTED_GEOMETRY",
        }
    }
}
