use thiserror::Error;

/// Error type for the project-store boundary.
///
/// The compute path is pure and total; only (de)serialization against the
/// externally owned store can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq, uniffi::Error)]
pub enum StoreError {
    #[error("malformed project store payload: {message}")]
    MalformedPayload { message: String },

    #[error("could not encode project store payload: {message}")]
    EncodeFailed { message: String },

    #[error("project not found: {id}")]
    NotFound { id: String },
}
