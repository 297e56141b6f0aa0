//! Error types for `mentorconnect-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// A caller contract was violated, e.g. a zero page size.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("duplicate entity id: {0}")]
  DuplicateId(Uuid),

  #[error("email is required to sign in")]
  EmailRequired,

  #[error("directory has no mentors or mentees to sign in as")]
  EmptyDirectory,

  #[error("password hashing failed: {0}")]
  PasswordHash(String),

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
