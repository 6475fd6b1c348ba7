//! Errors the ledger core can surface.
//!
//! Validation failures ([`MissingField`], [`InvalidAmount`]) are detected
//! before any network call; [`DuplicateId`] and [`UnknownId`] signal a
//! store/reconciler defect or client/server divergence; and
//! [`OperationInFlight`] is the per-identifier guard rejecting an
//! overlapping request.
//!
//! [`MissingField`]: LedgerError::MissingField
//! [`InvalidAmount`]: LedgerError::InvalidAmount
//! [`DuplicateId`]: LedgerError::DuplicateId
//! [`UnknownId`]: LedgerError::UnknownId
//! [`OperationInFlight`]: LedgerError::OperationInFlight
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("\"{0}\" already present!")]
    DuplicateId(String),
    #[error("\"{0}\" not found!")]
    UnknownId(String),
    #[error("an operation for \"{0}\" is already in flight")]
    OperationInFlight(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Missing {0}")]
    MissingField(&'static str),
}
