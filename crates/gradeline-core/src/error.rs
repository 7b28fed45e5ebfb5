//! Error types for `gradeline-core`.
//!
//! The engine itself never fails; these cover lookups and parsing at the
//! edges.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unit not found: {0}")]
  UnitNotFound(Uuid),

  #[error("unknown grade scale: {0:?}")]
  UnknownGradeScale(String),

  #[error("unknown assessment template: {0:?}")]
  UnknownTemplate(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
