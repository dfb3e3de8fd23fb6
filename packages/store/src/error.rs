use thiserror::Error;

/// Failures reported by a [`crate::UserStore`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no user with id {0:?}")]
    NotFound(String),
    #[error("a user with id {0:?} already exists")]
    DuplicateId(String),
}
