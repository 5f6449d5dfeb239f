//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed input to the tree core.
///
/// Building and analysing trees never fails; only turning text into a
/// sequence can.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value '{token}' at position {position}: expected an integer")]
    InvalidValue { token: String, position: usize },
}
