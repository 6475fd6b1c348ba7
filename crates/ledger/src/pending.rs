use std::collections::HashSet;

use crate::LedgerError;

/// Per-identifier in-flight guard.
///
/// All mutations are serialized through the single event loop, but two
/// *operations* targeting the same identifier (say an edit and a delete)
/// could still be outstanding at once, and their completions would then
/// race the uniqueness and existence invariants. The guard rejects the
/// second operation up front instead of queueing it; the user simply
/// retries once the first completes.
///
/// Creates carry no identifier until the service assigns one, so they
/// are never guarded.
#[derive(Debug, Default)]
pub struct PendingOps {
    in_flight: HashSet<String>,
}

impl PendingOps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an outstanding operation on `id`.
    ///
    /// Fails if one is already pending for the same identifier.
    pub fn begin(&mut self, id: &str) -> Result<(), LedgerError> {
        if !self.in_flight.insert(id.to_string()) {
            return Err(LedgerError::OperationInFlight(id.to_string()));
        }
        Ok(())
    }

    /// Clears the outstanding operation on `id`, whatever its outcome.
    pub fn finish(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    #[must_use]
    pub fn is_pending(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }
}
