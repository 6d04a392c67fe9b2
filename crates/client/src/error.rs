use crate::api::ApiError;

/// Errors surfaced by the client crate outside the submission flow.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
