use thiserror::Error;

/// Failures surfaced by the two external collaborators.
///
/// The controller never inspects the variant: initialization failures are
/// swallowed and submission failures all surface the same error modal.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("identity provider error: {0}")]
    Identity(String),

    #[error("submission read error: {0}")]
    Read(String),

    #[error("submission write error: {0}")]
    Write(String),
}
