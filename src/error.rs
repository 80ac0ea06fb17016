use thiserror::Error;

/// Failures of the browser preference store.
///
/// These never reach the user. The theme controller logs them and carries on
/// as if no preference had been stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{0}` from local storage")]
    Read(String),
    #[error("failed to write `{0}` to local storage")]
    Write(String),
}
