use tracing::warn;

use crate::{Amount, CategoryFilter, Expense, LedgerError};

/// In-memory ordered collection of expense records.
///
/// This is the single source of truth for the session: the UI reads from
/// it and every mutation goes through the explicit operations below.
/// Insertion order is preserved and is the display order; the store never
/// re-sorts by date or amount.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Vec<Expense>,
}

impl ExpenseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection with a freshly fetched, normalized
    /// sequence. The prior collection is discarded wholesale.
    pub fn load(&mut self, records: Vec<Expense>) {
        self.records = records;
    }

    /// Appends a newly created record.
    ///
    /// The service is assumed to issue fresh identifiers, so a duplicate
    /// id here is a logic error; the store is left unchanged.
    pub fn insert(&mut self, record: Expense) -> Result<(), LedgerError> {
        if self.contains(&record.id) {
            return Err(LedgerError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Substitutes the record with matching id wholesale.
    ///
    /// A miss leaves the store unchanged and reports the caller defect:
    /// it must never turn into a silent insert.
    pub fn replace(&mut self, record: Expense) -> Result<(), LedgerError> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => {
                warn!(id = %record.id, "replace target not in the collection");
                Err(LedgerError::UnknownId(record.id))
            }
        }
    }

    /// Removes the record with the given id, returning it.
    ///
    /// Deletion is idempotent from the UI's perspective: an absent id is
    /// a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Option<Expense> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The subsequence matching `filter`, order preserved.
    ///
    /// Recomputed from the live collection on every call; nothing is
    /// cached across mutations.
    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Expense> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Running total over ALL records, ignoring any active filter.
    ///
    /// Cents accumulate as integers, so the two-decimal display never
    /// drifts. An empty collection totals zero.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.records
            .iter()
            .fold(Amount::ZERO, |acc, r| acc + r.amount)
    }
}
